use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

pub struct CmdResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

fn resolve_bin_path() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_client-menu") {
        return PathBuf::from(path);
    }

    let exe_name = if cfg!(windows) {
        "client-menu.exe"
    } else {
        "client-menu"
    };
    let fallback = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .and_then(|deps| deps.parent().map(PathBuf::from))
        .map(|debug_dir| debug_dir.join(exe_name));

    match fallback {
        Some(path) if path.exists() => path,
        _ => panic!("unable to resolve client-menu binary path for integration test"),
    }
}

/// Run the binary with `args`, feeding `stdin` and then closing it.
pub fn run_cli_case(args: &[&str], stdin: &[u8]) -> CmdResult {
    let mut child = Command::new(resolve_bin_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env("RUST_BACKTRACE", "1")
        .spawn()
        .expect("spawn client-menu");

    // The child may exit before reading stdin (e.g. on a config error);
    // a broken pipe here is not a test failure.
    if let Err(e) = child.stdin.take().expect("piped stdin").write_all(stdin) {
        assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe, "write stdin: {e}");
    }

    let output = child.wait_with_output().expect("wait for client-menu");
    CmdResult {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
