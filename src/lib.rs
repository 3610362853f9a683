// ABOUTME: Library root for ros2-fdu - FDU records for ROS2 workloads.
// ABOUTME: The debug CLI binary is in main.rs.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod fdu;
pub mod output;
pub mod types;
