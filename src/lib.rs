pub mod api;
pub mod config;
pub mod models;

#[cfg(test)]
mod test;
