use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn combined_output(output: &std::process::Output) -> String {
    format!(
        "{}\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn autojoin(work_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mts-autojoin").expect("binary is built");
    cmd.current_dir(work_dir);
    cmd.env("RUST_LOG", "warn");
    cmd
}

/// Fake ffmpeg that copies the manifest into the output file, `fail_manifest` exits with 3
#[cfg(unix)]
fn fake_ffmpeg(dir: &Path, fail_manifest: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    // -loglevel error -f concat -safe 0 -i <manifest> -c copy <output>
    let script = format!(
        "#!/bin/sh\ncase \"$8\" in {}) exit 3;; esac\ncat \"$8\" > \"${{11}}\"\n",
        fail_manifest
    );

    let path = dir.join("fake-ffmpeg.sh");
    fs::write(&path, script).expect("write fake ffmpeg");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake ffmpeg");
    path
}

#[test]
fn invalid_folder_fails() {
    let work = TempDir::new().unwrap();

    let output = autojoin(work.path())
        .arg("does-not-exist")
        .output()
        .expect("runs");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("You did not provide a valid folder"), "stderr: {stderr}");
}

#[test]
fn folder_without_segments_fails() {
    let work = TempDir::new().unwrap();
    let videos = work.path().join("videos");
    fs::create_dir(&videos).unwrap();
    fs::write(videos.join("notes.txt"), "nothing here").unwrap();

    let output = autojoin(work.path())
        .arg("videos")
        .output()
        .expect("runs");

    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains(&format!("MTS files will be checked at '{}'", videos.display())),
        "output: {text}"
    );
    assert!(
        text.contains(&format!("No MTS files found at '{}'", videos.display())),
        "output: {text}"
    );
}

#[cfg(unix)]
#[test]
fn merges_groups_and_removes_manifests() {
    let work = TempDir::new().unwrap();
    let videos = work.path().join("videos");
    fs::create_dir(&videos).unwrap();
    for name in ["00002.MTS", "00001.mts", "00003.TS"] {
        fs::write(videos.join(name), [0u8; 16]).unwrap();
    }
    let ffmpeg = fake_ffmpeg(work.path(), "none");

    let output = autojoin(work.path())
        .arg(&videos)
        .env("AUTOJOIN_FFMPEG", &ffmpeg)
        .output()
        .expect("runs");

    assert!(output.status.success(), "output: {}", combined_output(&output));

    // small files end up one per group, in name order
    for (i, name) in ["00001.mts", "00002.MTS", "00003.TS"].iter().enumerate() {
        let merged = fs::read_to_string(work.path().join(format!("video-output-{}.mts", i + 1)))
            .expect("output exists");
        assert_eq!(merged, format!("file '{}'\n", videos.join(name).display()));
    }
    assert!(!work.path().join("video-output-4.mts").exists());

    for i in 1..=3 {
        assert!(!work.path().join(format!("file-list-{}.meta", i)).exists());
    }
}

#[cfg(unix)]
#[test]
fn failed_group_does_not_stop_the_rest() {
    let work = TempDir::new().unwrap();
    let videos = work.path().join("videos");
    fs::create_dir(&videos).unwrap();
    for name in ["00001.MTS", "00002.MTS", "00003.MTS"] {
        fs::write(videos.join(name), [0u8; 16]).unwrap();
    }
    let ffmpeg = fake_ffmpeg(work.path(), "file-list-2.meta");

    let output = autojoin(work.path())
        .arg(&videos)
        .env("AUTOJOIN_FFMPEG", &ffmpeg)
        .output()
        .expect("runs");

    assert_eq!(output.status.code(), Some(3));
    assert!(work.path().join("video-output-1.mts").exists());
    assert!(!work.path().join("video-output-2.mts").exists());
    assert!(work.path().join("video-output-3.mts").exists());
    assert!(!work.path().join("file-list-2.meta").exists());

    let text = combined_output(&output);
    assert!(text.contains("1 of 3 groups could not be merged"), "output: {text}");
}

#[test]
fn missing_merge_program_fails() {
    let work = TempDir::new().unwrap();
    let videos = work.path().join("videos");
    fs::create_dir(&videos).unwrap();
    fs::write(videos.join("00001.MTS"), [0u8; 16]).unwrap();

    let output = autojoin(work.path())
        .arg(&videos)
        .env("AUTOJOIN_FFMPEG", work.path().join("no-such-ffmpeg"))
        .output()
        .expect("runs");

    assert_eq!(output.status.code(), Some(1));
    assert!(!work.path().join("file-list-1.meta").exists());
}
