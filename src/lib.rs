pub mod config;
pub mod net;
pub mod report;
pub mod viz;

#[cfg(test)]
mod test;
