// ABOUTME: Integration tests for deployment descriptor parsing.
// ABOUTME: YAML and JSON inputs, defaults, and field validation.

use ros2_fdu::descriptor::*;
use ros2_fdu::fdu::{FduError, Ros2Fdu};
use ros2_fdu::types::InstanceId;
use std::fs;

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_yaml() {
        let yaml = r#"
id: talker-fdu
name: talker
image:
  uri: file:///opt/ros2/talker.tar.gz
command:
  binary: talker
  args: ["--ros-args"]
"#;
        let d = FduDescriptor::from_yaml(yaml).unwrap();
        assert_eq!(d.id.as_str(), "talker-fdu");
        assert_eq!(d.image.uri, "file:///opt/ros2/talker.tar.gz");
        assert_eq!(
            d.command,
            Some(CommandSpec::new("talker").arg("--ros-args"))
        );
        assert_eq!(d.hypervisor, ROS2_HYPERVISOR);
        assert_eq!(d.migration_kind, MigrationKind::Cold);
        assert!(d.is_ros2());
    }

    #[test]
    fn parse_full_json() {
        let json = r#"{
            "uuid": "listener-fdu",
            "name": "listener",
            "image": {"uri": "/opt/ros2/listener", "checksum": "abc123", "format": "tar.gz"},
            "command": {"binary": "listener", "args": null},
            "hypervisor": "ros2",
            "migration_kind": "LIVE",
            "interfaces": ["eth0"],
            "connection_points": ["cp1", "cp2"],
            "depends_on": ["talker-fdu"]
        }"#;
        let d = FduDescriptor::from_json(json).unwrap();
        assert_eq!(d.id.as_str(), "listener-fdu");
        assert_eq!(d.image.checksum.as_deref(), Some("abc123"));
        assert!(d.command.as_ref().unwrap().args.is_empty());
        assert_eq!(d.migration_kind, MigrationKind::Live);
        assert_eq!(d.connection_points.len(), 2);
        assert_eq!(d.depends_on[0].as_str(), "talker-fdu");
        assert!(d.is_ros2());
    }

    #[test]
    fn command_is_optional_in_descriptor() {
        let yaml = r#"
id: bare
name: bare
image:
  uri: /opt/ros2/bare
"#;
        let d = FduDescriptor::from_yaml(yaml).unwrap();
        assert!(d.command.is_none());

        let err = Ros2Fdu::new(&d, InstanceId::new("i"), "bare", "/tmp/bare.log").unwrap_err();
        assert_eq!(err, FduError::MissingCommand);
    }
}

mod validation {
    use super::*;

    #[test]
    fn empty_binary_is_rejected() {
        let yaml = r#"
id: x
name: x
image:
  uri: /opt/x
command:
  binary: ""
"#;
        let err = FduDescriptor::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("binary cannot be empty"));
    }

    #[test]
    fn empty_uri_is_rejected() {
        let yaml = r#"
id: x
name: x
image:
  uri: "   "
"#;
        let err = FduDescriptor::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("image uri cannot be empty"));
    }

    #[test]
    fn missing_image_is_rejected() {
        let err = FduDescriptor::from_yaml("id: x\nname: x\n").unwrap_err();
        assert!(err.to_string().contains("image"));
    }

    #[test]
    fn unknown_migration_kind_is_rejected() {
        let yaml = r#"
id: x
name: x
image:
  uri: /opt/x
migration_kind: warm
"#;
        let err = FduDescriptor::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("unknown migration kind"));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_picks_format_from_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("fdu.json");
        fs::write(
            &json_path,
            r#"{"id":"a","name":"a","image":{"uri":"/opt/a"},"command":{"binary":"a"}}"#,
        )
        .unwrap();
        assert_eq!(FduDescriptor::load(&json_path).unwrap().name, "a");

        let yaml_path = dir.path().join("fdu.yml");
        fs::write(
            &yaml_path,
            "id: b\nname: b\nimage:\n  uri: /opt/b\ncommand:\n  binary: b\n",
        )
        .unwrap();
        assert_eq!(FduDescriptor::load(&yaml_path).unwrap().name, "b");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = FduDescriptor::load(std::path::Path::new("/nonexistent/fdu.yml")).unwrap_err();
        assert!(matches!(err, ros2_fdu::error::Error::Io(_)));
    }
}
