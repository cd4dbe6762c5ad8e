use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::path::missing;
use predicates::prelude::*;

fn gcfromdna(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gcfromdna").unwrap();
    cmd.current_dir(dir.path()).env_remove("GCFROMDNA_STATS");
    cmd
}

#[test]
fn sample_round_trip() {
    let tmp = TempDir::new().unwrap();
    tmp.child("sample.fa")
        .write_str(">A desc1\nACGCGT\n>B desc2\nATATAT\n")
        .unwrap();

    gcfromdna(&tmp)
        .arg("sample.fa")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "New doc 'sample_GC.csv' written from file 'sample.fa'.",
        ))
        .stdout(predicate::str::contains("Exiting..."));

    tmp.child("sample_GC.csv")
        .assert("A_desc1,66.66\nB_desc2,0.0\n");
}

#[test]
fn rerun_overwrites_report() {
    let tmp = TempDir::new().unwrap();
    tmp.child("run.fa").write_str(">r one\nGAA\n").unwrap();
    tmp.child("run_GC.csv").write_str("old,1.0\nold,2.0\n").unwrap();

    gcfromdna(&tmp).arg("run.fa").assert().success();
    gcfromdna(&tmp).arg("run.fa").assert().success();

    tmp.child("run_GC.csv").assert("r_one,33.33\n");
}

#[test]
fn batch_survives_bad_files() {
    let tmp = TempDir::new().unwrap();
    tmp.child("broken.fa").write_str("not a fasta file\n").unwrap();
    tmp.child("hole.fa").write_str(">h\n>i\nAC\n").unwrap();
    tmp.child("notes.txt").write_str(">n\nGG\n").unwrap();
    tmp.child("fine.fa").write_str(">f x y\nGGCCAT\n").unwrap();

    gcfromdna(&tmp)
        .args(["broken.fa", "hole.fa", "absent.fa", "notes.txt", "fine.fa"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Problem parsing file 'broken.fa'. Check filename.",
        ))
        .stdout(predicate::str::contains(
            "Problem parsing file 'hole.fa'. Check filename.",
        ))
        .stdout(predicate::str::contains(
            "Problem parsing file 'absent.fa'. Check filename.",
        ))
        .stdout(predicate::str::contains(
            "'notes.txt' not fasta (.fa) file (not parsed).",
        ))
        .stdout(predicate::str::contains(
            "New doc 'fine_GC.csv' written from file 'fine.fa'.",
        ));

    tmp.child("broken_GC.csv").assert(missing());
    tmp.child("hole_GC.csv").assert(missing());
    tmp.child("notes_GC.csv").assert(missing());
    tmp.child("fine_GC.csv").assert("f_x,66.66\n");
}

#[test]
fn interactive_all() {
    let tmp = TempDir::new().unwrap();
    tmp.child("one.fa").write_str(">a\nGGGG\n").unwrap();
    tmp.child("two.fa").write_str(">b\nACGT\n").unwrap();

    gcfromdna(&tmp)
        .write_stdin("all\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("  0 one.fa\n  1 two.fa\n"));

    tmp.child("one_GC.csv").assert("a,100.0\n");
    tmp.child("two_GC.csv").assert("b,50.0\n");
}

#[test]
fn interactive_bad_selection_then_name() {
    let tmp = TempDir::new().unwrap();
    tmp.child("one.fa").write_str(">a\nGGGG\n").unwrap();
    tmp.child("two.fa").write_str(">b\nACGT\n").unwrap();

    gcfromdna(&tmp)
        .write_stdin("5\ntwo.fa\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("* Bad selection *"));

    tmp.child("one_GC.csv").assert(missing());
    tmp.child("two_GC.csv").assert("b,50.0\n");
}

#[test]
fn interactive_quit_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    tmp.child("one.fa").write_str(">a\nGGGG\n").unwrap();

    gcfromdna(&tmp)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes from file operations:").not());

    tmp.child("one_GC.csv").assert(missing());
}

#[test]
fn empty_folder_exits_cleanly() {
    let tmp = TempDir::new().unwrap();

    gcfromdna(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No files with .fa suffix found in current directory.",
        ));
}

#[test]
fn stats_go_to_stderr() {
    let tmp = TempDir::new().unwrap();
    tmp.child("s.fa").write_str(">s\nGC\n").unwrap();

    gcfromdna(&tmp)
        .env("GCFROMDNA_STATS", "1")
        .arg("s.fa")
        .assert()
        .success()
        .stderr(predicate::str::contains("GCFROMDNA_STATS input=s.fa rows=1"));
}

#[test]
fn hyphen_led_names_are_files() {
    let tmp = TempDir::new().unwrap();
    tmp.child("ok.fa").write_str(">o\nGGAA\n").unwrap();
    tmp.child("-x.fa").write_str(">x\nGCGC\n").unwrap();

    gcfromdna(&tmp)
        .args(["ok.fa", "-x.fa", "-missing.fa"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "New doc '-x_GC.csv' written from file '-x.fa'.",
        ))
        .stdout(predicate::str::contains(
            "Problem parsing file '-missing.fa'. Check filename.",
        ));

    tmp.child("ok_GC.csv").assert("o,50.0\n");
    tmp.child("-x_GC.csv").assert("x,100.0\n");
}
