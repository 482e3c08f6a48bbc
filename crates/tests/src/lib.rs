#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_client_tests;

#[cfg(test)]
mod roles_client_tests;
