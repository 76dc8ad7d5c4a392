pub mod auth;
pub mod cards;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;
