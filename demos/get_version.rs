// Looking up a program's version from its config file, where every step can
// come up empty.
//
// Written by hand this is a ladder of `match ... { None => return "" }`
// blocks. Here each step yields an `Option<String>` instead, and the wrapper
// returns the configured fallback (an empty string) the first time a step
// yields `None`.

use std::collections::HashMap;

use bailout::{Returned, Yielded, configure_with, from_fn};

type Files = HashMap<String, String>;

fn sample_files() -> Files {
    let mut files = Files::new();
    files.insert(
        "/etc/tool.conf".to_string(),
        "program_name = tool-1.4.2\nverbose = true\n".to_string(),
    );
    files.insert(
        "/home/ada/tool.conf".to_string(),
        "program_name = tool-nightly\n".to_string(),
    );
    files.insert(
        "/home/bob/tool.conf".to_string(),
        "verbose = false\n".to_string(),
    );
    files
}

fn default_config_path(files: &Files) -> Option<String> {
    let path = "/etc/tool.conf";
    files.contains_key(path).then(|| path.to_string())
}

fn program_name(config: &str) -> Option<String> {
    config.lines().find_map(|line| {
        let (key, value) = line.split_once('=')?;
        (key.trim() == "program_name").then(|| value.trim().to_string())
    })
}

fn version_of(program_name: &str) -> Option<String> {
    let (_, version) = program_name.rsplit_once('-')?;
    version
        .split('.')
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
        .then(|| version.to_string())
}

fn main() {
    println!("Config lookup example using bailout\n");

    let files = sample_files();
    let files = &files;

    #[rustfmt::skip]
    let get_version = configure_with(String::new()).wrap(
        move |config_path: Option<&str>| {
            let config_path = config_path
                .map(String::from)
                .or_else(|| default_config_path(files));
            Yielded(config_path, from_fn(move |path: String| {
            Yielded(files.get(&path).cloned(), from_fn(|config: String| {
            Yielded(program_name(&config), from_fn(|name: String| {
            Yielded(version_of(&name), from_fn(|version: String| {
            Returned(version) })) })) })) }))
        },
    );

    let lookups = [
        None,
        Some("/home/ada/tool.conf"),
        Some("/home/bob/tool.conf"),
        Some("/home/eve/tool.conf"),
    ];
    for config_path in lookups {
        let version = get_version.call(config_path);
        println!(
            "  {:<22} => {:?}",
            config_path.unwrap_or("(default)"),
            version
        );
    }
}
