//! Integration tests for the `porter project` commands against a stub API.
//!
//! Each test gets its own HOME so the user config file is isolated.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tempfile::TempDir;
use tiny_http::{Response, Server, StatusCode};

/// (method, url) of every request the stub server saw.
type RequestLog = Arc<Mutex<Vec<(String, String)>>>;

/// Stub Porter API. Serves until dropped.
struct StubApi {
    host: String,
    log: RequestLog,
    stop: Arc<AtomicBool>,
}

impl Drop for StubApi {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

fn stub_api(authorized: bool) -> StubApi {
    let server = Server::http("127.0.0.1:0").expect("http server");
    let host = format!("http://{}", server.server_addr());
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);
    let stop = Arc::new(AtomicBool::new(false));
    let stopped = Arc::clone(&stop);

    thread::spawn(move || {
        while !stopped.load(Ordering::SeqCst) {
            let mut req = match server.recv_timeout(Duration::from_millis(100)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };
            let mut body = String::new();
            let _ = req.as_reader().read_to_string(&mut body);

            let method = req.method().as_str().to_string();
            let url = req.url().to_string();
            seen.lock().expect("log lock").push((method.clone(), url.clone()));

            let (status, payload) = if !authorized {
                (401, String::from("unauthorized"))
            } else {
                match (method.as_str(), url.as_str()) {
                    ("GET", "/api/auth/check") => (200, r#"{"id": 1, "email": "dev@example.com"}"#.to_string()),
                    ("GET", "/api/users/1/projects") => (
                        200,
                        r#"[{"id": 1, "name": "alpha"}, {"id": 2, "name": "beta"}]"#.to_string(),
                    ),
                    ("POST", "/api/projects") => {
                        let name = serde_json::from_str::<serde_json::Value>(&body)
                            .ok()
                            .and_then(|v| v["name"].as_str().map(str::to_string))
                            .unwrap_or_default();
                        (200, serde_json::json!({"id": 7, "name": name}).to_string())
                    }
                    ("DELETE", "/api/projects/2") => (200, r#"{"id": 2, "name": "beta"}"#.to_string()),
                    ("GET", "/api/projects/2/clusters") => (
                        200,
                        r#"[{"id": 3, "name": "gke-prod", "server": "https://10.0.0.1"}]"#.to_string(),
                    ),
                    _ => (404, String::new()),
                }
            };

            let _ = req.respond(Response::from_string(payload).with_status_code(StatusCode(status)));
        }
    });

    StubApi { host, log, stop }
}

fn write_user_config(home: &Path, contents: &str) {
    let dir = home.join(".porter");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

fn read_user_config(home: &Path) -> String {
    fs::read_to_string(home.join(".porter").join("config.toml")).unwrap_or_default()
}

fn run_porter(home: &Path, host: &str, args: &[&str], stdin: &str) -> Output {
    run_porter_in(home, home, host, args, stdin)
}

/// Run with separate HOME and working directory, so the user and project
/// config files differ.
fn run_porter_in(home: &Path, cwd: &Path, host: &str, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_porter"))
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .current_dir(cwd)
        .args(["--host", host])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute porter");

    if let Some(mut input) = child.stdin.take() {
        let _ = input.write_all(stdin.as_bytes());
    }

    child.wait_with_output().expect("Failed to wait for porter")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_list_marks_current_project() {
    let home = TempDir::new().unwrap();
    write_user_config(home.path(), "[project]\nid = 2\n");
    let api = stub_api(true);

    let output = run_porter(home.path(), &api.host, &["project", "list"], "");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = stdout_of(&output);
    let alpha = stdout.lines().find(|l| l.contains("alpha")).unwrap();
    let beta = stdout.lines().find(|l| l.contains("beta")).unwrap();
    assert!(!alpha.contains("(current project)"));
    assert!(beta.contains("(current project)"));
}

#[test]
fn test_list_stdout_is_clean() {
    let home = TempDir::new().unwrap();
    let api = stub_api(true);

    let output = run_porter(home.path(), &api.host, &["project", "list"], "");
    let stdout = stdout_of(&output);

    for line in stdout.lines() {
        assert!(
            !line.trim().starts_with('{'),
            "stdout contains JSON line: {}",
            line
        );
    }
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
}

#[test]
fn test_quiet_suppresses_info_logs() {
    let home = TempDir::new().unwrap();
    let api = stub_api(true);

    let output = run_porter(home.path(), &api.host, &["-q", "project", "list"], "");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Quiet mode should suppress INFO logs, got: {}",
        stderr
    );
}

#[test]
fn test_set_writes_user_config() {
    let home = TempDir::new().unwrap();
    // Unreachable host: set never talks to the API
    let output = run_porter(home.path(), "http://127.0.0.1:9", &["project", "set", "12"], "");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Current project set to 12"));
    assert!(read_user_config(home.path()).contains("id = 12"));
}

#[test]
fn test_create_stores_new_project_as_current() {
    let home = TempDir::new().unwrap();
    let api = stub_api(true);

    let output = run_porter(home.path(), &api.host, &["project", "create", "gamma"], "");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Created project 'gamma' with id 7"), "{}", stdout);
    assert!(read_user_config(home.path()).contains("id = 7"));

    let requests = api.log.lock().unwrap();
    assert_eq!(requests[0], ("GET".to_string(), "/api/auth/check".to_string()));
    assert_eq!(requests[1], ("POST".to_string(), "/api/projects".to_string()));
}

#[test]
fn test_delete_aborts_without_confirmation() {
    let home = TempDir::new().unwrap();
    let api = stub_api(true);

    let output = run_porter(home.path(), &api.host, &["project", "delete", "2"], "n\n");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Aborted."));
    assert!(!api.log.lock().unwrap().iter().any(|(method, _)| method == "DELETE"));
}

#[test]
fn test_delete_confirmed_clears_current_project() {
    let home = TempDir::new().unwrap();
    write_user_config(home.path(), "[project]\nid = 2\n");
    let api = stub_api(true);

    let output = run_porter(home.path(), &api.host, &["project", "delete", "2"], "YES\n");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Deleted project 'beta' (id 2)"));
    assert!(!read_user_config(home.path()).contains("id = 2"));
}

#[test]
fn test_delete_with_yes_flag_skips_prompt() {
    let home = TempDir::new().unwrap();
    let api = stub_api(true);

    let output = run_porter(home.path(), &api.host, &["project", "delete", "2", "--yes"], "");

    assert!(output.status.success());
    assert!(!stdout_of(&output).contains("[y/n]"));
}

#[test]
fn test_clusters_requires_current_project() {
    let home = TempDir::new().unwrap();
    let api = stub_api(true);

    let output = run_porter(home.path(), &api.host, &["project", "clusters"], "");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No project set"));
}

#[test]
fn test_clusters_for_current_project() {
    let home = TempDir::new().unwrap();
    write_user_config(home.path(), "[project]\nid = 2\n");
    let api = stub_api(true);

    let output = run_porter(home.path(), &api.host, &["project", "clusters"], "");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("gke-prod"));
    assert!(stdout.contains("https://10.0.0.1"));
}

#[test]
fn test_failed_login_check_stops_command() {
    let home = TempDir::new().unwrap();
    let api = stub_api(false);

    let output = run_porter(home.path(), &api.host, &["project", "list"], "");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Login check failed"));
    assert_eq!(api.log.lock().unwrap().len(), 1);
}

#[test]
fn test_set_updates_shadowing_project_config() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    write_user_config(cwd.path(), "[project]\nid = 1\n");
    let api = stub_api(true);

    let output = run_porter_in(home.path(), cwd.path(), &api.host, &["project", "set", "2"], "");
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Current project set to 2"));
    assert!(read_user_config(cwd.path()).contains("id = 2"));
    assert!(!home.path().join(".porter").exists());

    let output = run_porter_in(home.path(), cwd.path(), &api.host, &["project", "list"], "");
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let alpha = stdout.lines().find(|l| l.contains("alpha")).unwrap();
    let beta = stdout.lines().find(|l| l.contains("beta")).unwrap();
    assert!(!alpha.contains("(current project)"), "{}", stdout);
    assert!(beta.contains("(current project)"), "{}", stdout);
}

#[test]
fn test_set_writes_user_config_when_cwd_has_no_project_id() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    let output = run_porter_in(home.path(), cwd.path(), "http://127.0.0.1:9", &["project", "set", "5"], "");

    assert!(output.status.success());
    assert!(read_user_config(home.path()).contains("id = 5"));
    assert!(!cwd.path().join(".porter").exists());
}

#[test]
fn test_delete_clears_project_level_current_project() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    write_user_config(cwd.path(), "[project]\nid = 2\n");
    let api = stub_api(true);

    let output = run_porter_in(
        home.path(),
        cwd.path(),
        &api.host,
        &["project", "delete", "2", "--yes"],
        "",
    );

    assert!(output.status.success());
    assert!(!read_user_config(cwd.path()).contains("id = 2"));

    let output = run_porter_in(home.path(), cwd.path(), &api.host, &["project", "clusters"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No project set"));
}
