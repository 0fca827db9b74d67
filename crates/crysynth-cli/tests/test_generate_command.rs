//! Integration tests for the generate command.

use crysynth_backend_audio::rng::{create_rng, derive_request_seed};
use crysynth_backend_audio::synthesize_to_file;
use crysynth_cli::commands::generate::{self, GENERATION_FAILED};
use crysynth_spec::{PresetFile, SynthesisRequest, DEFAULT_SEED};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

fn read_wav(path: &Path) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::open(path).unwrap();
    let spec = reader.spec();
    let samples = reader.samples::<i16>().map(Result::unwrap).collect();
    (spec, samples)
}

#[test]
fn test_builtin_presets_render_four_cries() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("cries");

    let code = generate::run(None, Some(out.to_str().unwrap()), None, &[], true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    for id in ["A", "B", "C", "D"] {
        let (spec, samples) = read_wav(&out.join(format!("{id}.wav")));
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(samples.len(), 220_500);
        assert!(samples.iter().any(|&s| s != 0));
    }
}

#[test]
fn test_cli_output_matches_library() {
    let tmp = tempfile::tempdir().unwrap();
    let presets_path = tmp.path().join("cries.json");
    let mut file = PresetFile::default();
    file.settings.duration_seconds = 0.25;
    fs::write(&presets_path, file.to_json_pretty().unwrap()).unwrap();

    let cli_out = tmp.path().join("cli");
    let code = generate::run(
        Some(presets_path.to_str().unwrap()),
        Some(cli_out.to_str().unwrap()),
        None,
        &["C".to_string()],
        false,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let lib_out = tmp.path().join("lib");
    fs::create_dir_all(&lib_out).unwrap();
    let request = SynthesisRequest::new("C", 575.0).with_duration(0.25);
    let mut rng = create_rng(derive_request_seed(DEFAULT_SEED, "C"));
    synthesize_to_file(&request, &lib_out, &mut rng).unwrap();

    assert_eq!(
        fs::read(cli_out.join("C.wav")).unwrap(),
        fs::read(lib_out.join("C.wav")).unwrap()
    );
}

#[test]
fn test_seed_flag_is_reproducible() {
    let tmp = tempfile::tempdir().unwrap();
    let presets_path = tmp.path().join("cries.json");
    let mut file = PresetFile::default();
    file.settings.duration_seconds = 0.2;
    fs::write(&presets_path, file.to_json_pretty().unwrap()).unwrap();
    let presets = presets_path.to_str().unwrap();

    let render = |dir: &str, seed: u32| {
        let out = tmp.path().join(dir);
        let code = generate::run(
            Some(presets),
            Some(out.to_str().unwrap()),
            Some(seed),
            &["A".to_string()],
            true,
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        fs::read(out.join("A.wav")).unwrap()
    };

    let first = render("one", 7);
    let second = render("two", 7);
    let other = render("three", 8);

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn test_zero_duration_preset_file() {
    let tmp = tempfile::tempdir().unwrap();
    let presets_path = tmp.path().join("silent.json");
    fs::write(
        &presets_path,
        r#"{
            "settings": { "duration_seconds": 0 },
            "presets": [{ "output_id": "silent", "fundamental_hz": 440 }]
        }"#,
    )
    .unwrap();

    let out = tmp.path().join("out");
    let code = generate::run(
        Some(presets_path.to_str().unwrap()),
        Some(out.to_str().unwrap()),
        None,
        &[],
        true,
    )
    .unwrap();

    assert_eq!(code, ExitCode::SUCCESS);
    let (_, samples) = read_wav(&out.join("silent.wav"));
    assert!(samples.is_empty());
}

#[test]
fn test_unwritable_output_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, b"").unwrap();

    let code = generate::run(
        None,
        Some(blocker.join("out").to_str().unwrap()),
        None,
        &["A".to_string()],
        true,
    )
    .unwrap();

    assert_eq!(code, ExitCode::from(GENERATION_FAILED));
}
