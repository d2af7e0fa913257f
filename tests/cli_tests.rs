use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_in(dir: &Path, stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_qrlink"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn qrlink");

    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

#[cfg(test)]
mod cli_tests {
    use test_case::test_case;

    use super::run_in;

    #[test]
    fn test_example_link() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_in(dir.path(), b"https://example.com\n");

        assert!(out.status.success());
        assert_eq!(
            String::from_utf8(out.stdout).unwrap(),
            "Enter the link: QR code generated and saved as qrcode.png\n"
        );
        assert!(out.stderr.is_empty());

        let img = image::open(dir.path().join("qrcode.png")).unwrap();
        assert_eq!(img.width(), 330);
    }

    #[test_case(b"hello\n"; "plain_text")]
    #[test_case(b"\n"; "empty_line")]
    #[test_case(b"no trailing newline"; "no_newline")]
    #[test_case("caf\u{e9} \u{1f30e}\n".as_bytes(); "non_ascii")]
    fn test_writes_png(stdin: &[u8]) {
        let dir = tempfile::tempdir().unwrap();
        let out = run_in(dir.path(), stdin);

        assert!(out.status.success());
        let bytes = std::fs::read(dir.path().join("qrcode.png")).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);
    }

    #[test]
    fn test_rerun_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qrcode.png");

        assert!(run_in(dir.path(), b"https://example.com\n").status.success());
        let first = std::fs::read(&path).unwrap();
        assert!(run_in(dir.path(), b"https://example.com\n").status.success());
        let again = std::fs::read(&path).unwrap();
        assert!(run_in(dir.path(), b"https://example.org\n").status.success());
        let other = std::fs::read(&path).unwrap();

        assert_eq!(first, again);
        assert_ne!(first, other);
    }

    #[test]
    fn test_no_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_in(dir.path(), b"");

        assert!(!out.status.success());
        assert_eq!(out.stdout, b"Enter the link: ");
        assert!(String::from_utf8_lossy(&out.stderr).contains("NoInput"));
        assert!(!dir.path().join("qrcode.png").exists());
    }

    #[test]
    fn test_too_long_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = format!("{}\n", "x".repeat(5000));
        let out = run_in(dir.path(), input.as_bytes());

        assert!(!out.status.success());
        assert!(String::from_utf8_lossy(&out.stderr).contains("DataTooLong"));
        assert!(!dir.path().join("qrcode.png").exists());
    }
}
