//! Invocations shared by the Linux and macOS executors.

use sysprobe_domain::CommandInvocation;
use sysprobe_domain::tool::{FindArgs, GrepArgs, LsofArgs, PsArgs};

/// `ps <options>`, or `ps aux` when no options were given.
pub(super) fn ps_listing(args: &PsArgs) -> CommandInvocation {
    if args.options.is_empty() {
        CommandInvocation::new("ps").arg("aux")
    } else {
        CommandInvocation::new("ps").args(args.options.iter().cloned())
    }
}

/// `find PATH [-maxdepth D] -name N [-type T]`
pub(super) fn find(args: &FindArgs) -> CommandInvocation {
    let mut inv = CommandInvocation::new("find").arg(args.path());
    if let Some(depth) = args.maxdepth() {
        inv = inv.arg("-maxdepth").arg(depth.to_string());
    }
    inv = inv.arg("-name").arg(args.name.trim());
    if let Some(kind) = args.kind() {
        inv = inv.arg("-type").arg(kind);
    }
    inv
}

/// `grep [-r] [-i] [-c] -e PATTERN -- FILES...`
pub(super) fn grep(args: &GrepArgs) -> CommandInvocation {
    let mut inv = CommandInvocation::new("grep");
    if args.recursive {
        inv = inv.arg("-r");
    }
    if args.ignore_case {
        inv = inv.arg("-i");
    }
    if args.count_only {
        inv = inv.arg("-c");
    }
    inv.arg("-e")
        .arg(args.pattern.as_str())
        .arg("--")
        .args(args.files())
}

/// `lsof [options] [-i <port_spec>] [-u U] [-- PATH]`
///
/// `port_spec` renders the port filter, which differs between platforms.
pub(super) fn lsof(args: &LsofArgs, port_spec: impl Fn(u32) -> String) -> CommandInvocation {
    let mut inv = CommandInvocation::new("lsof").args(args.options.iter().cloned());
    if let Some(port) = args.port() {
        inv = inv.arg("-i").arg(port_spec(port));
    }
    if let Some(user) = args.user() {
        inv = inv.arg("-u").arg(user);
    }
    if let Some(path) = args.path() {
        inv = inv.arg("--").arg(path);
    }
    inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::platform::testing::argv;
    use sysprobe_domain::tool::decode;

    fn argv_of(inv: &CommandInvocation) -> Vec<String> {
        std::iter::once(inv.program.clone())
            .chain(inv.args.iter().cloned())
            .collect()
    }

    #[test]
    fn test_find_defaults_to_current_directory() {
        let args: FindArgs = decode(r#"{"name": "*.log"}"#).unwrap();
        assert_eq!(argv_of(&find(&args)), argv(&["find", ".", "-name", "*.log"]));
    }

    #[test]
    fn test_find_all_options() {
        let args: FindArgs =
            decode(r#"{"path": "/var/log", "name": "*.gz", "type": "f", "maxdepth": 2}"#).unwrap();
        assert_eq!(
            argv_of(&find(&args)),
            argv(&["find", "/var/log", "-maxdepth", "2", "-name", "*.gz", "-type", "f"])
        );
    }

    #[test]
    fn test_grep_flags_and_files() {
        let args: GrepArgs = decode(
            r#"{"pattern": "-v", "file": "a.log b.log", "recursive": true, "ignore_case": true, "count_only": true}"#,
        )
        .unwrap();
        assert_eq!(
            argv_of(&grep(&args)),
            argv(&["grep", "-r", "-i", "-c", "-e", "-v", "--", "a.log", "b.log"])
        );
    }

    #[test]
    fn test_ps_listing_default_and_options() {
        let args: PsArgs = decode("{}").unwrap();
        assert_eq!(argv_of(&ps_listing(&args)), argv(&["ps", "aux"]));

        let args: PsArgs = decode(r#"{"options": ["-ef"]}"#).unwrap();
        assert_eq!(argv_of(&ps_listing(&args)), argv(&["ps", "-ef"]));
    }

    #[test]
    fn test_lsof_filters_in_order() {
        let args: LsofArgs =
            decode(r#"{"options": ["-n"], "port": 8080, "user": "www", "path": "/tmp/x"}"#).unwrap();
        assert_eq!(
            argv_of(&lsof(&args, |p| format!(":{}", p))),
            argv(&["lsof", "-n", "-i", ":8080", "-u", "www", "--", "/tmp/x"])
        );
    }
}
