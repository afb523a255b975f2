//! Command-line behaviour of the `seq-resolver` binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn seq_resolver() -> Command {
    Command::cargo_bin("seq-resolver").unwrap()
}

fn with_fixtures(cmd: &mut Command) -> &mut Command {
    cmd.arg("--fasta")
        .arg(data("sequences.fa"))
        .arg("--aliases")
        .arg(data("aliases.tsv"))
}

#[test]
fn test_help_lists_commands() {
    seq_resolver()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sequence"))
        .stdout(predicate::str::contains("overlap"))
        .stdout(predicate::str::contains("store-export"));
}

#[test]
fn test_sequence_residue_slice() {
    let mut cmd = seq_resolver();
    cmd.args(["sequence", "NP_004324.2", "--start", "600", "--end", "601"]);
    with_fixtures(&mut cmd)
        .assert()
        .success()
        .stdout("VK\n");
}

#[test]
fn test_sequence_inter_residue_json() {
    let mut cmd = seq_resolver();
    cmd.args([
        "--format",
        "json",
        "sequence",
        "NP_004324.2",
        "--start",
        "599",
        "--end",
        "601",
        "--mode",
        "inter-residue",
    ]);
    with_fixtures(&mut cmd)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sequence\": \"VK\""))
        .stdout(predicate::str::contains("\"mode\": \"inter_residue\""));
}

#[test]
fn test_sequence_errors_exit_non_zero() {
    let mut cmd = seq_resolver();
    cmd.args(["sequence", "NP_004324.2", "--start", "601", "--end", "600"]);
    with_fixtures(&mut cmd)
        .assert()
        .failure()
        .stderr(predicate::str::contains("start (601) cannot be greater than end (600)"));

    let mut cmd = seq_resolver();
    cmd.args(["sequence", "NP_004324.22"]);
    with_fixtures(&mut cmd)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Accession, NP_004324.22, not found in SeqRepo"));
}

#[test]
fn test_translate_with_target_namespace() {
    let mut cmd = seq_resolver();
    cmd.args(["translate", "NM_002529.3", "--target", "ga4gh"]);
    with_fixtures(&mut cmd)
        .assert()
        .success()
        .stdout("ga4gh:SQ.RSkww1aYmsMiWbNdNnOTnVDAM3ZWp1uA\n");
}

#[test]
fn test_aliases_does_not_parse_namespace() {
    let mut cmd = seq_resolver();
    cmd.args(["aliases", "GRCh38:2"]);
    with_fixtures(&mut cmd)
        .assert()
        .failure()
        .stderr(predicate::str::contains("SeqRepo could not translate alias GRCh38:2"));
}

#[test]
fn test_chromosome_and_back() {
    let mut cmd = seq_resolver();
    cmd.args(["chromosome", "7"]);
    with_fixtures(&mut cmd)
        .assert()
        .success()
        .stdout("NC_000007.14\nNC_000007.13\n");

    let mut cmd = seq_resolver();
    cmd.args(["accession-chromosome", "NC_000007.13"]);
    with_fixtures(&mut cmd).assert().success().stdout("7\n");

    let mut cmd = seq_resolver();
    cmd.args(["chromosome", "117"]);
    with_fixtures(&mut cmd)
        .assert()
        .failure()
        .stderr(predicate::str::contains("117 is not a valid chromosome"));
}

#[test]
fn test_fasta_export() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("limk2.fa");

    let mut cmd = seq_resolver();
    cmd.args(["fasta", "NM_005569.4"]).arg(&output);
    with_fixtures(&mut cmd).assert().success();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.starts_with(">ensembl:ENST00000331728.9|refseq:NM_005569.4|"));
    assert!(!content.ends_with('\n'));
}

#[test]
fn test_overlap_tsv() {
    let mut cmd = seq_resolver();
    cmd.args(["--format", "tsv", "overlap", "50", "150", "--chromosome", "7", "--annotation"])
        .arg(data("mane_excerpt.gff"));
    with_fixtures(&mut cmd)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "gene\tinfo_name\tcds_start\tcds_stop\toverlap_start\toverlap_stop",
        ))
        .stdout(predicate::str::contains("GENE1\tNP_000001.1\t100\t200\t100\t150"));
}

#[test]
fn test_overlap_none_prints_null_json() {
    let mut cmd = seq_resolver();
    cmd.args(["--format", "json", "overlap", "5000", "6000", "--identifier", "NC_000007.14", "--annotation"])
        .arg(data("mane_excerpt.gff"));
    with_fixtures(&mut cmd).assert().success().stdout("null\n");
}

#[test]
fn test_overlap_requires_location() {
    let mut cmd = seq_resolver();
    cmd.args(["overlap", "1", "2", "--annotation"])
        .arg(data("mane_excerpt.gff"));
    with_fixtures(&mut cmd)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Must provide either `chromosome` or `identifier`"));
}

#[test]
fn test_store_export_then_query() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("seqrepo.json");

    seq_resolver()
        .arg("store-export")
        .arg(&store)
        .arg("--fasta")
        .arg(data("sequences.fa"))
        .arg("--aliases")
        .arg(data("aliases.tsv"))
        .assert()
        .success();

    let json = std::fs::read_to_string(&store).unwrap();
    assert!(json.contains("\"version\": \"1.0.0\""));

    seq_resolver()
        .args(["sequence", "NP_004324.2", "--start", "600", "--end", "600", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout("V\n");
}

#[test]
fn test_missing_repository_flags() {
    seq_resolver()
        .args(["sequence", "NP_004324.2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--store"));
}
