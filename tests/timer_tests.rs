use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn test_start_by_index_with_task() {
    let env = TestEnv::seeded();

    env.tt()
        .args(["start", "1", "2", "Fix", "login"])
        .assert()
        .success()
        .stdout(contains("Started: Acme - Mobile ('Fix login')"));

    let data = env.read_data();
    assert_eq!(data["current"]["customer"], "Acme");
    assert_eq!(data["current"]["project"], "Mobile");
    assert_eq!(data["current"]["notes"][0], "Fix login");
    assert_eq!(data["history"].as_array().unwrap().len(), 0);
}

#[test]
fn test_quick_start_without_subcommand() {
    let env = TestEnv::seeded();

    env.tt()
        .args(["2", "1"])
        .assert()
        .success()
        .stdout(contains("Started: Globex - Ops"))
        .stdout(contains("('").not());
}

#[test]
fn test_start_by_free_text() {
    let env = TestEnv::new();

    env.tt()
        .args(["start", "Initech", "TPS Reports"])
        .assert()
        .success()
        .stdout(contains("Started: Initech - TPS Reports"));
}

#[test]
fn test_start_stops_running_timer() {
    let env = TestEnv::seeded();
    env.running_since(20, "Old", "Proj", &["earlier"]);

    env.tt()
        .args(["start", "1", "1"])
        .assert()
        .success()
        .stdout(contains("Stopped: Old - Proj (Billed: 0h 30m)"))
        .stdout(contains("Started: Acme - Web"));

    let data = env.read_data();
    let history = data["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["duration_seconds"], 1800);
    assert_eq!(history[0]["notes"][0], "earlier");
    assert_eq!(data["current"]["customer"], "Acme");
}

#[test]
fn test_stop_without_timer() {
    let env = TestEnv::new();

    env.tt()
        .arg("stop")
        .assert()
        .success()
        .stdout(contains("No timer running."));

    assert!(!env.data.exists());
}

#[test]
fn test_stop_rounds_up_to_block() {
    let env = TestEnv::new();
    env.running_since(44, "Acme", "Web", &[]);

    env.tt()
        .arg("pause")
        .assert()
        .success()
        .stdout(contains("Stopped: Acme - Web (Billed: 0h 45m)"));

    let data = env.read_data();
    assert!(data["current"].is_null());
    let entry = &data["history"][0];
    assert_eq!(entry["duration_seconds"], 2700);
    assert!(entry["raw_seconds"].as_f64().unwrap() >= 2640.0);
    assert_eq!(entry["start_str"].as_str().unwrap().len(), 5);
}

#[test]
fn test_start_then_stop_bills_one_block() {
    let env = TestEnv::seeded();

    env.tt().args(["1", "1"]).assert().success();
    env.tt()
        .arg("stop")
        .assert()
        .success()
        .stdout(contains("Billed: 0h 15m"));

    assert_eq!(env.read_data()["history"][0]["duration_seconds"], 900);
}

#[test]
fn test_note_requires_running_timer() {
    let env = TestEnv::new();

    env.tt()
        .args(["note", "something"])
        .assert()
        .failure()
        .stderr(contains("No timer running."));
}

#[test]
fn test_note_is_appended() {
    let env = TestEnv::new();
    env.running_since(5, "Acme", "Web", &["first"]);

    env.tt()
        .args(["note", "Discussed", "sprint", "goals"])
        .assert()
        .success()
        .stdout(contains("Note added: \"Discussed sprint goals\""));

    let notes = env.read_data()["current"]["notes"].clone();
    assert_eq!(notes, serde_json::json!(["first", "Discussed sprint goals"]));
}

#[test]
fn test_empty_note_is_rejected() {
    let env = TestEnv::new();
    env.running_since(5, "Acme", "Web", &[]);

    env.tt()
        .arg("note")
        .assert()
        .failure()
        .stderr(contains("Note cannot be empty."));
}

#[test]
fn test_start_with_shortcut() {
    let env = TestEnv::seeded();

    env.tt()
        .args(["start", "@daily", "sprint", "planning"])
        .assert()
        .success()
        .stdout(contains("Using shortcut '@daily'"))
        .stdout(contains(
            "Started: Acme Corp - Management ('Daily standup, sprint planning')",
        ));

    env.tt()
        .args(["start", "-s", "DAILY"])
        .assert()
        .success()
        .stdout(contains("Stopped: Acme Corp - Management"))
        .stdout(contains("('Daily standup')"));

    env.tt()
        .arg("@daily")
        .assert()
        .success()
        .stdout(contains("Using shortcut '@daily'"));
}

#[test]
fn test_unknown_shortcut_fails() {
    let env = TestEnv::seeded();

    env.tt()
        .args(["start", "@nope"])
        .assert()
        .failure()
        .stderr(contains("Shortcut '@nope' not found"));

    assert!(!env.data.exists());
}

#[test]
fn test_interactive_start_from_menus() {
    let env = TestEnv::seeded();

    env.tt()
        .write_stdin("1\n2\n")
        .assert()
        .success()
        .stdout(contains("--- SELECT CUSTOMER ---"))
        .stdout(contains(" [1] Acme"))
        .stdout(contains(" [2] Globex"))
        .stdout(contains("--- SELECT PROJECT FOR 'Acme' ---"))
        .stdout(contains("Started: Acme - Mobile"));
}

#[test]
fn test_interactive_start_with_typed_names() {
    let env = TestEnv::new();

    env.tt()
        .arg("start")
        .write_stdin("Umbrella\nLab\n")
        .assert()
        .success()
        .stdout(contains("(List is empty)"))
        .stdout(contains("Enter Project Name: "))
        .stdout(contains("Started: Umbrella - Lab"));
}

#[test]
fn test_single_customer_arg_prompts_for_project() {
    let env = TestEnv::seeded();

    env.tt()
        .args(["start", "2"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(contains("Started: Globex - Ops"));
}

#[test]
fn test_invalid_menu_choice_cancels() {
    let env = TestEnv::seeded();

    env.tt()
        .write_stdin("7\n")
        .assert()
        .failure()
        .stdout(contains("Invalid number."))
        .stderr(contains("Cancelled or Invalid Input."));

    assert!(!env.data.exists());
}

#[test]
fn test_cancelled_start_keeps_running_timer() {
    let env = TestEnv::seeded();
    env.running_since(10, "Acme", "Web", &[]);

    env.tt()
        .args(["start", "9"])
        .assert()
        .failure()
        .stderr(contains("Customer ID 9 not found."));

    let data = env.read_data();
    assert_eq!(data["current"]["customer"], "Acme");
    assert_eq!(data["history"].as_array().unwrap().len(), 0);
}

#[test]
fn test_corrupt_data_file_starts_fresh() {
    let env = TestEnv::new();
    std::fs::write(&env.data, "{ not json").unwrap();

    env.tt()
        .arg("stop")
        .assert()
        .success()
        .stdout(contains("Could not load tt_data.json"))
        .stdout(contains("No timer running."));
}

#[test]
fn test_stop_with_absurd_start_timestamp_does_not_crash() {
    let env = TestEnv::new();
    env.write_data(serde_json::json!({
        "current": {
            "customer": "Acme",
            "project": "Web",
            "start_timestamp": -1e20,
            "notes": []
        },
        "history": []
    }));

    env.tt()
        .arg("stop")
        .assert()
        .success()
        .stdout(contains("Stopped: Acme - Web"));

    assert_eq!(env.read_data()["history"][0]["duration_seconds"], u64::MAX);

    env.tt().arg("report").assert().success();
}

#[test]
fn test_shortcut_flag_without_start() {
    let env = TestEnv::seeded();

    env.tt()
        .args(["-s", "daily", "retro"])
        .assert()
        .success()
        .stdout(contains("Using shortcut '@daily'"))
        .stdout(contains("('Daily standup, retro')"));

    env.tt()
        .args(["--shortcut=DAILY"])
        .assert()
        .success()
        .stdout(contains("Using shortcut '@daily'"));
}

#[test]
fn test_uppercase_command_after_global_flags() {
    let env = TestEnv::new();
    env.running_since(20, "Acme", "Web", &[]);

    env.tt()
        .arg("STOP")
        .assert()
        .success()
        .stdout(contains("Stopped: Acme - Web (Billed: 0h 30m)"))
        .stdout(contains("Enter Project Name").not());

    assert!(env.read_data()["current"].is_null());
}

#[test]
fn test_help_in_any_case() {
    let env = TestEnv::new();

    for word in ["HELP", "Help"] {
        env.tt()
            .arg(word)
            .assert()
            .success()
            .stdout(contains("Example workflow"))
            .stdout(contains("Enter Project Name").not());
    }
    assert!(!env.data.exists());
}
