use aethero::{
    extractor::Candidate,
    metrics::{ComplianceStatus, assess_compliance},
    validator::validate,
};

use super::focused;

#[test]
fn given_cited_and_calibrated_tags_when_assessed_then_batch_is_compliant() {
    let compliance = assess_compliance(&[focused(6, 0.5), focused(6, 0.5)]);

    assert_eq!(compliance.constitutional_status, ComplianceStatus::Compliant);
    assert_eq!(compliance.compliance_factors.rule_citation, 1.0);
    assert_eq!(compliance.compliance_factors.memory_linkage, 1.0);
    assert!((compliance.overall_compliance_score - 1.0).abs() < 1e-12);
}

#[test]
fn given_placeholder_citations_when_assessed_then_batch_is_non_compliant() {
    let defaulted = validate(&Candidate::new()).expect("defaults should be accepted");

    let compliance = assess_compliance(&[defaulted]);

    assert_eq!(compliance.compliance_factors.rule_citation, 0.0);
    assert_eq!(compliance.compliance_factors.memory_linkage, 0.0);
    assert_eq!(compliance.constitutional_status, ComplianceStatus::NonCompliant);
}

#[test]
fn given_empty_batch_when_assessed_then_score_is_zero() {
    let compliance = assess_compliance(&[]);

    assert_eq!(compliance.overall_compliance_score, 0.0);
    assert_eq!(compliance.constitutional_status, ComplianceStatus::NonCompliant);
}
