use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_respiscan-convert"))
}

#[test]
fn test_missing_model_exits_with_one() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    let out = bin()
        .arg("--skip-install")
        .arg("-C")
        .arg(dir.path())
        .output()?;

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Source file 'RespiScan_Final_Model.h5' not found"));
    Ok(())
}

#[test]
fn test_dry_run_prints_command_without_python() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("model.h5"), b"HDF5")?;
    let out = bin()
        .args(["--dry-run", "--python", "no-such-python"])
        .args(["--input", "model.h5", "--output", "out"])
        .arg("-C")
        .arg(dir.path())
        .output()?;

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(
        "no-such-python -m tensorflowjs.converters.converter --input_format keras \
         --output_format tfjs_graph_model --weight_shard_size_bytes 4194304 model.h5 out"
    ));
    Ok(())
}

#[test]
fn test_unknown_interpreter_fails_install() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("RespiScan_Final_Model.h5"), b"HDF5")?;
    let out = bin()
        .args(["--python", "respiscan-no-such-python"])
        .arg("-C")
        .arg(dir.path())
        .output()?;

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Please try running: pip install tensorflowjs h5py"));
    Ok(())
}

#[test]
fn test_bad_flag_is_usage_error() -> std::io::Result<()> {
    let out = bin().arg("--no-such-flag").output()?;
    assert_eq!(out.status.code(), Some(2));
    Ok(())
}
