use deprecation_annotator::{pipeline, AnnotatorConfig, Insertion, MemberScope};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const DOMAIN_TS: &str = "\
/**
 * Elasticsearch domain.
 *
 * @resource AWS::Elasticsearch::Domain
 */
export class Domain {
  /**
   * Grant read permissions for this domain.
   */
  public grantRead() {}
}
";

const BASE_TS: &str = "\
export abstract class DomainBase {
  /**
   * Arn of the domain.
   */
  public readonly domainArn: string;
}
";

const METADATA: &str = r#"{
  "types": {
    "es.Domain": {
      "docs": { "stability": "stable" },
      "locationInModule": { "filename": "lib/domain.ts", "line": 6 },
      "methods": [
        { "name": "grantRead", "locationInModule": { "filename": "lib/domain.ts", "line": 10 } }
      ],
      "properties": [
        { "name": "domainArn", "locationInModule": { "filename": "lib/base.ts", "line": 5 } }
      ]
    },
    "es.DomainBase": {
      "docs": { "stability": "stable" },
      "locationInModule": { "filename": "lib/base.ts", "line": 1 }
    }
  }
}"#;

fn fixture(dir: &Path) -> AnnotatorConfig {
    fs::create_dir_all(dir.join("lib")).unwrap();
    fs::write(dir.join("lib/domain.ts"), DOMAIN_TS).unwrap();
    fs::write(dir.join("lib/base.ts"), BASE_TS).unwrap();
    fs::write(dir.join(".jsii"), METADATA).unwrap();

    AnnotatorConfig {
        root: dir.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn annotates_target_and_reported_member_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture(dir.path());

    let report = pipeline::run(&config).unwrap();

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.total_edits(), 3);

    let domain = fs::read_to_string(dir.path().join("lib/domain.ts")).unwrap();
    assert_eq!(
        domain,
        "\
/**
 * Elasticsearch domain.
 *
 * @resource AWS::Elasticsearch::Domain
 * @deprecated use opensearchservice module instead
 */
export class Domain {
  /**
   * Grant read permissions for this domain.
   *
   * @deprecated use opensearchservice module instead
   */
  public grantRead() {}
}
"
    );

    let base = fs::read_to_string(dir.path().join("lib/base.ts")).unwrap();
    assert!(base.contains("   * Arn of the domain.\n   *\n   * @deprecated"));
}

#[test]
fn target_only_scope_leaves_other_files_alone() {
    let dir = tempfile::tempdir().unwrap();
    let config = AnnotatorConfig {
        member_scope: MemberScope::TargetOnly,
        ..fixture(dir.path())
    };

    let report = pipeline::run(&config).unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("lib/base.ts")).unwrap(),
        BASE_TS
    );
}

#[test]
fn edits_are_applied_bottom_up() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture(dir.path());

    let report = pipeline::run(&config).unwrap();
    let domain = report
        .files
        .iter()
        .find(|f| f.file == Path::new("lib/domain.ts"))
        .unwrap();

    let lines: Vec<usize> = domain.edits.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![10, 6]);
    assert_eq!(domain.edits[0].insertion, Insertion::SeparatorAndNotice);
    assert_eq!(domain.edits[1].insertion, Insertion::NoticeOnly);
    assert_eq!(domain.lines_inserted, 3);
}

#[test]
fn second_run_inserts_again() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture(dir.path());

    pipeline::run(&config).unwrap();
    pipeline::run(&config).unwrap();

    let domain = fs::read_to_string(dir.path().join("lib/domain.ts")).unwrap();
    assert_eq!(domain.matches("@deprecated").count(), 4);
}
