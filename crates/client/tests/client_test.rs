use nodeboot_client::{Client, HostArch, HostOs, Platform};
use nodeboot_config::NodebootConfig;
use std::path::PathBuf;

fn create_client(os: HostOs, arch: HostArch) -> Client {
    Client::new("/opt/app").with_platform(Platform::new(os, arch))
}

mod client {
    use super::*;

    #[test]
    fn sets_defaults() {
        let client = Client::new("/opt/app");

        assert_eq!(client.root_path, PathBuf::from("/opt/app"));
        assert_eq!(client.node_version, "1.1.0");
        assert_eq!(client.npm_version, "2.4.1");
        assert_eq!(client.registry, None);
        assert_eq!(client.platform, Platform::current());
    }

    #[test]
    fn accepts_empty_root() {
        let client = Client::new("");

        assert_eq!(client.root_path, PathBuf::new());
    }

    #[test]
    fn inherits_from_config() {
        let config = NodebootConfig {
            node_version: "1.2.0".into(),
            npm_version: "3.0.0".into(),
            registry: Some("https://registry.example.com".into()),
        };
        let client = Client::from_config("/opt/app", &config);

        assert_eq!(client.node_version, "1.2.0");
        assert_eq!(client.npm_version, "3.0.0");
        assert_eq!(
            client.registry,
            Some("https://registry.example.com".to_owned())
        );
    }

    #[test]
    fn clients_are_independent() {
        let a = Client::new("/opt/app");
        let mut b = Client::new("/opt/app");

        b.node_version = "2.0.0".into();

        assert_eq!(a.node_version, "1.1.0");
        assert_ne!(a.node_base(), b.node_base());
    }
}

mod node_base {
    use super::*;

    #[test]
    fn uses_x64_by_default() {
        assert_eq!(
            create_client(HostOs::Linux, HostArch::X64).node_base(),
            "iojs-v1.1.0-linux-x64"
        );
    }

    #[test]
    fn uses_armv7l_for_arm() {
        assert_eq!(
            create_client(HostOs::Linux, HostArch::Arm).node_base(),
            "iojs-v1.1.0-linux-armv7l"
        );
    }

    #[test]
    fn uses_x86_for_32bit() {
        assert_eq!(
            create_client(HostOs::Windows, HostArch::X86).node_base(),
            "iojs-v1.1.0-windows-x86"
        );
    }

    #[test]
    fn falls_back_to_x64_for_unknown_arch() {
        assert_eq!(
            create_client(HostOs::Linux, HostArch::Other("aarch64".into())).node_base(),
            "iojs-v1.1.0-linux-x64"
        );
        assert_eq!(
            create_client(HostOs::Linux, HostArch::Other("riscv64".into())).node_base(),
            "iojs-v1.1.0-linux-x64"
        );
    }

    #[test]
    fn substitutes_os_verbatim() {
        assert_eq!(
            create_client(HostOs::MacOS, HostArch::X64).node_base(),
            "iojs-v1.1.0-darwin-x64"
        );
        assert_eq!(
            create_client(HostOs::Other("plan9".into()), HostArch::X64).node_base(),
            "iojs-v1.1.0-plan9-x64"
        );
    }

    #[test]
    fn reflects_version_changes() {
        let mut client = create_client(HostOs::Linux, HostArch::X64);

        client.node_version = "1.6.4".into();

        assert_eq!(client.node_base(), "iojs-v1.6.4-linux-x64");
    }
}

mod node_url {
    use super::*;

    #[test]
    fn uses_tarball_for_linux_x64() {
        assert_eq!(
            create_client(HostOs::Linux, HostArch::X64).node_url(),
            "https://iojs.org/dist/v1.1.0/iojs-v1.1.0-linux-x64.tar.gz"
        );
    }

    #[test]
    fn uses_tarball_for_x86() {
        assert_eq!(
            create_client(HostOs::Linux, HostArch::X86).node_url(),
            "https://iojs.org/dist/v1.1.0/iojs-v1.1.0-linux-x86.tar.gz"
        );
    }

    #[test]
    fn uses_tarball_for_arm() {
        assert_eq!(
            create_client(HostOs::Linux, HostArch::Arm).node_url(),
            "https://iojs.org/dist/v1.1.0/iojs-v1.1.0-linux-armv7l.tar.gz"
        );
    }

    #[test]
    fn uses_darwin_name_for_macos() {
        assert_eq!(
            create_client(HostOs::MacOS, HostArch::X64).node_url(),
            "https://iojs.org/dist/v1.1.0/iojs-v1.1.0-darwin-x64.tar.gz"
        );
    }

    #[test]
    fn windows_ignores_arch() {
        for arch in [
            HostArch::X64,
            HostArch::X86,
            HostArch::Arm,
            HostArch::Other("aarch64".into()),
        ] {
            assert_eq!(
                create_client(HostOs::Windows, arch).node_url(),
                "https://iojs.org/dist/v1.1.0/win-x86/iojs.exe"
            );
        }
    }
}

mod node_path {
    use super::*;

    #[test]
    fn joins_bin_for_unix() {
        assert_eq!(
            create_client(HostOs::Linux, HostArch::X64).node_path(),
            PathBuf::from("/opt/app")
                .join("iojs-v1.1.0-linux-x64")
                .join("bin")
                .join("node")
        );
    }

    #[test]
    fn joins_exe_for_windows() {
        let path = create_client(HostOs::Windows, HostArch::X64).node_path();

        assert_eq!(
            path,
            PathBuf::from("/opt/app")
                .join("iojs-v1.1.0-windows-x64")
                .join("bin")
                .join("node.exe")
        );
        assert!(path.ends_with("bin/node.exe"));
    }

    #[test]
    fn windows_path_respects_arch() {
        assert_eq!(
            create_client(HostOs::Windows, HostArch::X86).node_path(),
            PathBuf::from("/opt/app")
                .join("iojs-v1.1.0-windows-x86")
                .join("bin")
                .join("node.exe")
        );
    }

    #[test]
    fn root_only_changes_prefix() {
        let a = create_client(HostOs::Linux, HostArch::X64);
        let mut b = a.clone();

        b.root_path = PathBuf::from("/srv/other");

        assert_eq!(
            a.node_path().strip_prefix("/opt/app").unwrap(),
            b.node_path().strip_prefix("/srv/other").unwrap()
        );
    }
}

mod npm_url {
    use super::*;

    #[test]
    fn uses_archive() {
        assert_eq!(
            create_client(HostOs::Linux, HostArch::X64).npm_url(),
            "http://github.com/npm/npm/archive/v2.4.1.zip"
        );
    }

    #[test]
    fn only_depends_on_npm_version() {
        let mut a = create_client(HostOs::Linux, HostArch::X64);
        let mut b = create_client(HostOs::Windows, HostArch::Arm);

        a.npm_version = "3.0.0".into();
        b.npm_version = "3.0.0".into();
        b.node_version = "1.6.4".into();

        assert_eq!(a.npm_url(), "http://github.com/npm/npm/archive/v3.0.0.zip");
        assert_eq!(a.npm_url(), b.npm_url());
    }
}

mod npm_path {
    use super::*;

    #[test]
    fn joins_cli_script() {
        assert_eq!(
            create_client(HostOs::Linux, HostArch::Arm).npm_path(),
            PathBuf::from("/opt/app")
                .join("iojs-v1.1.0-linux-armv7l")
                .join("lib/node_modules/npm/cli.js")
        );
    }

    #[test]
    fn root_only_changes_prefix() {
        let a = create_client(HostOs::MacOS, HostArch::X64);
        let mut b = a.clone();

        b.root_path = PathBuf::from("/srv/other");

        assert_eq!(
            a.npm_path().strip_prefix("/opt/app").unwrap(),
            b.npm_path().strip_prefix("/srv/other").unwrap()
        );
    }
}
