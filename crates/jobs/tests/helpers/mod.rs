#![allow(dead_code)]

mod mock_cluster;

pub use mock_cluster::*;
