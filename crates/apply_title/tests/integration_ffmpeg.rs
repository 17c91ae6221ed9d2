// crates/apply_title/tests/integration_ffmpeg.rs

#![cfg(unix)]

use apply_title::{apply_title, ApplyError, FfmpegWriter, MetadataWriter, ToolError};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stand-in for ffmpeg: writes the `-metadata` argument followed by the input
/// (minus any earlier title line) to the last argument.
const FAKE_FFMPEG: &str = r#"#!/bin/sh
input=""
meta=""
while [ $# -gt 1 ]; do
    case "$1" in
        -i) shift; input="$1" ;;
        -metadata) shift; meta="$1" ;;
    esac
    shift
done
output="$1"
[ -f "$input" ] || { echo "$input: No such file or directory" >&2; exit 1; }
printf '%s\n' "$meta" > "$output"
grep -v '^title=' "$input" >> "$output"
pwd > "$output.cwd"
exit 0
"#;

const FAILING_FFMPEG: &str = r#"#!/bin/sh
echo "Could not find tag for codec pcm_s16le in stream #1" >&2
exit 1
"#;

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn setup() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

#[test]
fn test_ffmpeg_sets_title_and_replaces_file() {
    let (bin, media) = setup();
    let writer = FfmpegWriter::new(write_script(bin.path(), "ffmpeg", FAKE_FFMPEG));
    let clip = media.path().join("clip.mp4");
    fs::write(&clip, "video data\n").unwrap();

    let applied = apply_title(&clip, "clip", &writer).unwrap();

    assert_eq!(applied, "clip");
    assert_eq!(fs::read_to_string(&clip).unwrap(), "title=clip\nvideo data\n");
}

#[test]
fn test_ffmpeg_runs_inside_scratch_dir() {
    let (bin, media) = setup();
    let writer = FfmpegWriter::new(write_script(bin.path(), "ffmpeg", FAKE_FFMPEG));
    let scratch = media.path().join("work");
    fs::create_dir(&scratch).unwrap();
    let clip = media.path().join("clip.mp4");
    fs::write(&clip, "video data\n").unwrap();
    let out = scratch.join("clip.mp4");

    writer.write_title(&clip, &out, "t", &scratch).unwrap();

    let cwd = fs::read_to_string(scratch.join("clip.mp4.cwd")).unwrap();
    assert_eq!(
        fs::canonicalize(cwd.trim()).unwrap(),
        fs::canonicalize(&scratch).unwrap()
    );
}

#[test]
fn test_ffmpeg_twice_gives_identical_file() {
    let (bin, media) = setup();
    let writer = FfmpegWriter::new(write_script(bin.path(), "ffmpeg", FAKE_FFMPEG));
    let clip = media.path().join("a.mp4");
    fs::write(&clip, "video data\n").unwrap();

    apply_title(&clip, "Movie Night", &writer).unwrap();
    let once = fs::read(&clip).unwrap();
    apply_title(&clip, "Movie Night", &writer).unwrap();
    assert_eq!(fs::read(&clip).unwrap(), once);
}

#[test]
fn test_ffmpeg_failure_keeps_original_bytes() {
    let (bin, media) = setup();
    let writer = FfmpegWriter::new(write_script(bin.path(), "ffmpeg", FAILING_FFMPEG));
    let clip = media.path().join("c.mp4");
    let original = b"\x00\x01 not really mp4 \xfe\xff".to_vec();
    fs::write(&clip, &original).unwrap();

    let err = apply_title(&clip, "My Title", &writer).unwrap_err();

    match &err {
        ApplyError::Tool {
            source: ToolError::Failed { stderr, .. },
            ..
        } => assert!(stderr.contains("Could not find tag for codec")),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("exited with"));
    assert_eq!(fs::read(&clip).unwrap(), original);
    let leftovers: Vec<_> = fs::read_dir(media.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1, "scratch directory was not removed");
}

#[test]
fn test_ffmpeg_missing_input_is_tool_failure() {
    let (bin, media) = setup();
    let writer = FfmpegWriter::new(write_script(bin.path(), "ffmpeg", FAKE_FFMPEG));
    let clip = media.path().join("missing.mp4");

    let err = apply_title(&clip, "t", &writer).unwrap_err();

    assert!(matches!(err, ApplyError::Tool { .. }));
    assert!(err.to_string().contains("No such file or directory"));
    assert!(!clip.exists());
}

#[test]
fn test_unusual_file_names_pass_through() {
    let (bin, media) = setup();
    let writer = FfmpegWriter::new(write_script(bin.path(), "ffmpeg", FAKE_FFMPEG));
    let clip = media.path().join("-dash 'quote' $dollar.mkv");
    fs::write(&clip, "video data\n").unwrap();

    apply_title(&clip, "odd", &writer).unwrap();

    assert_eq!(fs::read_to_string(&clip).unwrap(), "title=odd\nvideo data\n");
}
