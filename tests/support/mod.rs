// ABOUTME: Test support utilities.
// ABOUTME: Shared tracing setup and descriptor fixtures for integration tests.

use ros2_fdu::descriptor::{CommandSpec, FduDescriptor, ImageDescriptor};
use ros2_fdu::fdu::Ros2Fdu;
use ros2_fdu::types::{FduId, InstanceId};
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("ros2_fdu=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Descriptor for the demo talker node, launched as `talker --ros-args`.
#[allow(dead_code)]
pub fn talker_descriptor() -> FduDescriptor {
    FduDescriptor::new(
        FduId::new("talker-fdu"),
        "talker",
        ImageDescriptor::new("file:///opt/ros2/demo_nodes_cpp.tar.gz"),
    )
    .with_command(CommandSpec::new("talker").arg("--ros-args"))
}

#[allow(dead_code)]
pub fn talker() -> Ros2Fdu {
    Ros2Fdu::new(
        &talker_descriptor(),
        InstanceId::new("7c1f0d52"),
        "talker",
        "/var/fos/ros2/logs/talker.log",
    )
    .unwrap()
}
