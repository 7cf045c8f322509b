use assert_cmd::Command;
use invbook::store::records::read_export;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn invbook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("invbook").unwrap();
    cmd.current_dir(dir).env_remove("INVBOOK_LOG");
    cmd
}

fn write_scan(dir: &Path, name: &str, bytes: &[u8]) -> String {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn naked_invocation_lists_seed_rows() {
    let temp = TempDir::new().unwrap();

    invbook(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FA-001"))
        .stdout(predicate::str::contains("Pièces détachées B"))
        .stdout(predicate::str::contains("FA-003.pdf"));

    assert!(!temp.path().join("pdf_factures").exists());
}

#[test]
fn config_command_leaves_no_attachment_dir_behind() {
    let temp = TempDir::new().unwrap();

    invbook(temp.path())
        .args(["config", "attachment-dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pdf_factures"));

    assert!(!temp.path().join("pdf_factures").exists());
}

#[test]
fn add_with_file_stores_document_and_exports_four_rows() {
    let temp = TempDir::new().unwrap();
    let scan = write_scan(temp.path(), "scan.pdf", b"0123456789");

    invbook(temp.path())
        .args([
            "add", "-n", "FA-004", "-d", "2025-02-01", "-D", "Test", "-a", "500", "-s",
            "Pending", "-f", &scan, "--export",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice FA-004 added"))
        .stdout(predicate::str::contains("Exported 4 invoices"));

    let stored = fs::read(temp.path().join("pdf_factures").join("FA-004.pdf")).unwrap();
    assert_eq!(stored, b"0123456789");

    let export = temp.path().join("tableau_achats.xlsx");
    assert!(fs::read(&export).unwrap().starts_with(b"PK"));
    let rows = read_export(&export).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3].invoice_number, "FA-004");
    assert_eq!(rows[3].description, "Test");
    assert_eq!(rows[3].attachment_name, "FA-004.pdf");
}

#[test]
fn add_without_file_adds_nothing() {
    let temp = TempDir::new().unwrap();

    invbook(temp.path())
        .args(["add", "-n", "FA-004", "--export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added").not());

    let rows = read_export(temp.path().join("tableau_achats.xlsx")).unwrap();
    assert_eq!(rows.len(), 3);
}

#[test]
fn add_rejects_non_pdf_upload() {
    let temp = TempDir::new().unwrap();
    let doc = write_scan(temp.path(), "scan.docx", b"not a pdf");

    invbook(temp.path())
        .args(["add", "-n", "FA-004", "-f", &doc])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid upload"));

    assert!(!temp.path().join("pdf_factures").join("FA-004.pdf").exists());
}

#[test]
fn add_rejects_invoice_number_outside_attachment_dir() {
    let temp = TempDir::new().unwrap();
    let scan = write_scan(temp.path(), "scan.pdf", b"%PDF");

    for number in ["../escaped", "2025/001"] {
        invbook(temp.path())
            .args(["add", "-n", number, "-f", &scan])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid invoice number"));
    }

    assert!(!temp.path().join("escaped.pdf").exists());
    assert!(!temp.path().join("pdf_factures").exists());
}

#[test]
fn preview_warns_for_missing_documents() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("pdf_factures");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("FA-002.pdf"), b"%PDF").unwrap();

    invbook(temp.path())
        .arg("preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("FA-002 - Pièces détachées B"))
        .stdout(predicate::str::contains("Attachment not found for FA-001"))
        .stdout(predicate::str::contains("Attachment not found for FA-003"))
        .stdout(predicate::str::contains("Attachment not found for FA-002").not());
}

#[test]
fn fetch_copies_document() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("pdf_factures");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("FA-001.pdf"), b"%PDF engine").unwrap();

    invbook(temp.path())
        .args(["fetch", "FA-001", "copy.pdf"])
        .assert()
        .success();

    assert_eq!(fs::read(temp.path().join("copy.pdf")).unwrap(), b"%PDF engine");
}

#[test]
fn export_to_unwritable_path_fails() {
    let temp = TempDir::new().unwrap();

    invbook(temp.path())
        .args(["export", "-o", "missing/dir/out.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn configured_export_file_is_used() {
    let temp = TempDir::new().unwrap();

    invbook(temp.path())
        .args(["config", "export-file", "achats.xlsx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export-file set to achats.xlsx"));

    invbook(temp.path()).arg("export").assert().success();

    assert!(temp.path().join("achats.xlsx").exists());
    assert!(!temp.path().join("tableau_achats.xlsx").exists());
}

#[test]
fn session_keeps_records_between_commands() {
    let temp = TempDir::new().unwrap();
    let scan = write_scan(temp.path(), "scan.pdf", b"%PDF-1.7");

    let script = format!(
        "add -n FA-004 -D \"Grue mobile\" -a 1200.50 -f {scan}\n\
         add -n FA-005 -s pending -f {scan}\n\
         export\n\
         quit\n"
    );

    invbook(temp.path())
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 invoices"));

    let rows = read_export(temp.path().join("tableau_achats.xlsx")).unwrap();
    let numbers: Vec<_> = rows.iter().map(|r| r.invoice_number.as_str()).collect();
    assert_eq!(numbers, vec!["FA-001", "FA-002", "FA-003", "FA-004", "FA-005"]);
    assert_eq!(rows[3].description, "Grue mobile");
    assert_eq!(rows[3].amount.to_string(), "1200.5");
}

#[test]
fn records_do_not_survive_the_process() {
    let temp = TempDir::new().unwrap();
    let scan = write_scan(temp.path(), "scan.pdf", b"%PDF");

    invbook(temp.path())
        .args(["add", "-n", "FA-004", "-f", &scan])
        .assert()
        .success();

    invbook(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("FA-004").not());
}
