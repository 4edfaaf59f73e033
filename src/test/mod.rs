mod config;
mod network;
