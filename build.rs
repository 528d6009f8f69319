use std::process::Command;

fn main() {
    let output = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .expect("failed to execute rustup");
    let installed = String::from_utf8_lossy(&output.stdout);
    if !installed.lines().any(|l| l.trim() == "wasm32-unknown-unknown") {
        panic!(
            "missing wasm32-unknown-unknown target; install it with `rustup target add wasm32-unknown-unknown`"
        );
    }
}
