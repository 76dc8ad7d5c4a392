//! Request body shape rules, applied before handler logic runs. Field
//! messages mirror what the registration and login endpoints report;
//! the other endpoints collapse any failure into one fixed message.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Zа-яА-ЯёЁ\s-]+$").expect("valid regex"));
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(https?://)(www\.)?([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(/[a-zA-Z0-9\-._~:/?#\[\]@!$&'()*+,;=]*)?(#)?$",
    )
    .expect("valid regex")
});
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// One message per failed field, joined for the response body.
#[derive(Debug)]
pub struct ValidationErrors(pub Vec<String>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

pub fn validate_name(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Поле обязательно для заполнения".into());
    }
    let len = value.chars().count();
    if len < 2 {
        return Err("Минимальная длина - 2 символа".into());
    }
    if len > 30 {
        return Err("Максимальная длина - 30 символов".into());
    }
    if !NAME_RE.is_match(value) {
        return Err("Допустимы только буквы, пробелы и дефисы".into());
    }
    Ok(())
}

pub fn validate_url(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Поле обязательно для заполнения".into());
    }
    if !URL_RE.is_match(value) {
        return Err("Некорректный URL. Пример: https://example.com/avatar.jpg".into());
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Email обязателен для заполнения".into());
    }
    if !EMAIL_RE.is_match(value) {
        return Err("Введите корректный email".into());
    }
    Ok(())
}

pub fn validate_password(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Пароль обязателен для заполнения".into());
    }
    if value.chars().count() < 8 {
        return Err("Пароль должен содержать минимум 8 символов".into());
    }
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    if !(has_digit && has_lower && has_upper) {
        return Err("Пароль должен содержать цифры, строчные и заглавные буквы".into());
    }
    Ok(())
}

fn collect(checks: Vec<Result<(), String>>) -> Result<(), ValidationErrors> {
    let failures: Vec<String> = checks.into_iter().filter_map(Result::err).collect();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(failures))
    }
}

/// Signup body: email and password mandatory, profile fields optional.
pub fn validate_registration(
    email: Option<&str>,
    password: Option<&str>,
    name: Option<&str>,
    about: Option<&str>,
    avatar: Option<&str>,
) -> Result<(), ValidationErrors> {
    let mut checks = vec![
        match email {
            Some(v) => validate_email(v),
            None => Err("Поле email обязательно для заполнения".into()),
        },
        match password {
            Some(v) => validate_password(v),
            None => Err("Пароль обязателен для заполнения".into()),
        },
    ];
    if let Some(v) = name {
        checks.push(validate_name(v));
    }
    if let Some(v) = about {
        checks.push(validate_name(v));
    }
    if let Some(v) = avatar {
        checks.push(validate_url(v));
    }
    collect(checks)
}

/// Profile update body: both fields mandatory, same shape rule as name.
pub fn validate_profile(name: Option<&str>, about: Option<&str>) -> Result<(), ValidationErrors> {
    collect(vec![
        match name {
            Some(v) => validate_name(v),
            None => Err("Поле обязательно для заполнения".into()),
        },
        match about {
            Some(v) => validate_name(v),
            None => Err("Поле обязательно для заполнения".into()),
        },
    ])
}

pub fn validate_avatar(avatar: Option<&str>) -> Result<(), ValidationErrors> {
    collect(vec![match avatar {
        Some(v) => validate_url(v),
        None => Err("Поле обязательно для заполнения".into()),
    }])
}

pub fn validate_card(name: Option<&str>, link: Option<&str>) -> Result<(), ValidationErrors> {
    collect(vec![
        match name {
            Some(v) => validate_name(v),
            None => Err("Поле обязательно для заполнения".into()),
        },
        match link {
            Some(v) => validate_url(v),
            None => Err("Поле обязательно для заполнения".into()),
        },
    ])
}
