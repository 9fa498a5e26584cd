//! Usage hint shown after a failed run.

/// Example pipeline for the current platform.
pub fn pipeline() -> &'static str {
    if cfg!(target_os = "macos") {
        "go mod graph | modv | dot -T svg | open -f -a /System/Applications/Preview.app"
    } else if cfg!(windows) {
        "go mod graph | modv | dot -T png -o graph.png; start graph.png"
    } else {
        "go mod graph | modv | dot -T svg -o /tmp/modv.svg | xdg-open /tmp/modv.svg"
    }
}

/// Full usage banner, including the focus argument.
pub fn usage_hint() -> String {
    format!(
        "\nUsages:\n\n\t{}\n\t{}\n\n",
        pipeline(),
        pipeline().replacen("| modv |", "| modv <module@version> |", 1)
    )
}
