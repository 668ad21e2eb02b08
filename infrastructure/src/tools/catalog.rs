//! Command Descriptor Catalog: the six diagnostic tools offered to the model.

use sysprobe_domain::{ToolDefinition, ToolName, ToolParameter};

pub fn ps_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolName::Ps.as_str(),
        "List running processes. Can filter by user, process name or PID, like the 'ps' command.",
    )
    .with_parameter(ToolParameter::new("user", "Only show processes owned by this user.", false))
    .with_parameter(ToolParameter::new(
        "name",
        "Only show processes whose command line matches this name.",
        false,
    ))
    .with_parameter(ToolParameter::new("pid", "Only show the process with this ID.", false))
    .with_parameter(
        ToolParameter::new(
            "options",
            "Extra options for ps, for example '-ef' or 'aux'.",
            false,
        )
        .with_type("array"),
    )
}

pub fn find_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolName::Find.as_str(),
        "Find files or directories by name and return the matching paths. Searches the current directory tree when no path is given.",
    )
    .with_parameter(ToolParameter::new(
        "path",
        "Directory to start from, e.g. '.' or '/home/user/'. Defaults to the current directory.",
        false,
    ))
    .with_parameter(ToolParameter::new(
        "name",
        "File or directory name to look for. Wildcards are supported.",
        true,
    ))
    .with_parameter(
        ToolParameter::new("type", "What to find: 'f' for files, 'd' for directories.", false)
            .with_allowed_values(["f", "d"]),
    )
    .with_parameter(
        ToolParameter::new(
            "maxdepth",
            "Maximum directory depth; 1 searches only the starting directory.",
            false,
        )
        .with_type("integer"),
    )
}

pub fn grep_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolName::Grep.as_str(),
        "Search files for lines matching a pattern and return the matching lines.",
    )
    .with_parameter(ToolParameter::new(
        "pattern",
        "Regular expression or plain string to search for.",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "file",
        "File or path to search. Separate multiple files with spaces.",
        true,
    ))
    .with_parameter(
        ToolParameter::new("recursive", "Search directories recursively (grep -r).", false)
            .with_type("boolean"),
    )
    .with_parameter(
        ToolParameter::new("ignore_case", "Ignore case when matching (grep -i).", false)
            .with_type("boolean"),
    )
    .with_parameter(
        ToolParameter::new("count_only", "Only report the number of matching lines (grep -c).", false)
            .with_type("boolean"),
    )
}

pub fn wget_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolName::Wget.as_str(),
        "Download a file from the internet into the current directory or a given path.",
    )
    .with_parameter(ToolParameter::new("url", "URL of the file to download.", true))
    .with_parameter(ToolParameter::new(
        "output_file",
        "Optional name or path to save the download as.",
        false,
    ))
}

pub fn ss_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolName::Ss.as_str(),
        "Show socket statistics for network connections. Can filter by port or protocol.",
    )
    .with_parameter(
        ToolParameter::new(
            "options",
            "Options for ss, e.g. '-l' (listening), '-t' (TCP), '-u' (UDP), '-n' (numeric), '-p' (processes), '-a' (all).",
            false,
        )
        .with_type("array"),
    )
    .with_parameter(
        ToolParameter::new("port", "Only show connections on this port.", false).with_type("integer"),
    )
    .with_parameter(ToolParameter::new(
        "protocol",
        "Only show this protocol: 'tcp', 'udp', 'unix' or 'raw'.",
        false,
    ))
}

pub fn lsof_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolName::Lsof.as_str(),
        "List open files and the processes using them. Useful to find which process holds a port or file. At least one filter is required.",
    )
    .with_parameter(ToolParameter::new("path", "Only show processes that have this file open.", false))
    .with_parameter(
        ToolParameter::new("port", "Only show processes using this network port.", false)
            .with_type("integer"),
    )
    .with_parameter(ToolParameter::new("user", "Only show files opened by this user.", false))
    .with_parameter(
        ToolParameter::new("options", "Extra options for lsof, e.g. '-n' or '-P'.", false)
            .with_type("array"),
    )
}
