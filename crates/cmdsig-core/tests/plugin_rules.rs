mod test_utils;

use test_utils::{assert_cases, host_flags, no_flags, Case};

#[test]
fn test_ecs() {
    let cases: &[Case] = &[
        ("compose up -f", &["ecs", "compose", "-f", "test", "up"], "ecs compose up"),
        ("compose up --file", &["ecs", "compose", "--file", "test", "up"], "ecs compose up"),
        (
            "compose up -n",
            &["ecs", "compose", "--file", "test", "-n", "test", "up"],
            "ecs compose up",
        ),
        (
            "compose up --project-name",
            &["ecs", "compose", "--file", "test", "--project-name", "test", "up"],
            "ecs compose up",
        ),
        ("compose up", &["ecs", "compose", "up"], "ecs compose up"),
        ("compose down -f", &["ecs", "compose", "-f", "test", "down"], "ecs compose down"),
        ("compose down", &["ecs", "compose", "down"], "ecs compose down"),
        ("compose ps -f", &["ecs", "compose", "-f", "test", "ps"], "ecs compose ps"),
        ("compose ps", &["ecs", "compose", "ps"], "ecs compose ps"),
        ("compose logs", &["ecs", "compose", "-f", "test", "logs"], "ecs compose logs"),
        ("setup", &["ecs", "setup"], "ecs setup"),
    ];
    assert_cases(&no_flags(), cases);
}

#[test]
fn test_ecs_narrowest_prefix() {
    let cases: &[Case] = &[
        ("flags after action", &["ecs", "compose", "up", "-f", "test"], "ecs compose up"),
        ("attached values", &["ecs", "compose", "--file=a.yml", "-ntest", "up"], "ecs compose up"),
        ("non-action positional skipped", &["ecs", "compose", "stack", "up"], "ecs compose up"),
        ("no action", &["ecs", "compose", "-f", "test"], "ecs compose"),
        ("unknown flag before action", &["ecs", "compose", "--bogus", "up"], "ecs compose"),
        ("unknown ecs subcommand", &["ecs", "frobnicate"], "ecs"),
        ("bare ecs", &["ecs"], "ecs"),
        ("terminator", &["ecs", "compose", "--", "up"], "ecs compose"),
    ];
    assert_cases(&no_flags(), cases);
}

#[test]
fn test_ecs_with_global_flags() {
    let cases: &[Case] = &[
        ("global before root", &["--debug", "ecs", "compose", "up"], "ecs compose up"),
        ("global inside compose", &["ecs", "compose", "-d", "up"], "ecs compose up"),
    ];
    assert_cases(&host_flags(), cases);
}

#[test]
fn test_scan() {
    let cases: &[Case] = &[
        ("scan", &["scan"], "scan"),
        ("scan image with long flags", &["scan", "--file", "file", "image"], "scan"),
        ("scan image with short flags", &["scan", "-f", "file", "image"], "scan"),
        ("scan with long flag", &["scan", "--dependency-tree", "image"], "scan"),
        ("auth", &["scan", "--auth"], "scan auth"),
        ("version", &["scan", "--version"], "scan version"),
        ("marker not immediate", &["scan", "image", "--version"], "scan"),
        ("marker after terminator", &["scan", "--", "--auth"], "scan"),
        ("image reference", &["scan", "registry.example.com/team/app:1.0"], "scan"),
    ];
    assert_cases(&no_flags(), cases);
}
