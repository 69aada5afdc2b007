//! End-to-end pipeline scenarios

use chrono::NaiveDate;
use policy_engine::{DirectorySink, PipelineConfig, PolicyEngine};
use pretty_assertions::assert_eq;
use shared_types::{BenefitKind, Category, ExclusionKind, FeatureKind};

const SAMPLE_POLICY: &str = "\
Acme Health Insurance Company Limited IRDAI Reg. No. 123.
CIN: U66000MH2000PLC123456. Registered Office: 12 Marine Drive, Mumbai 400020.
Policy Number: THP/2024/0042. Policy Type: Individual Health.
Sum Insured options: Rs. 3,00,000, Rs. 5,00,000 and Rs. 10,00,000.
Premium Details: payable annually or in monthly instalments.
Grace Period: 30 days from the due date.
Hospitalization benefits cover room rent and nursing for stays over 24 hours.
Day care treatments are covered without 24 hour hospitalization.
Benefits include hospital cash of Rs. 1,000 per day.
Waiting Period: 30 days from first policy inception.
Pre-existing disease waiting period of 36 months applies.
General Exclusions: war, nuclear risks and self-inflicted injury.
Not covered: cosmetic surgery and dental treatment.
Premium discounts of 10% apply for two year policies.
No claim bonus of 10% per claim-free year up to 50%.
Claims Process: intimate the insurer within 48 hours of admission.
Required documents for reimbursement include the discharge summary.
Toll Free: 1800 425 2255. Email: care@acmehealth.in. Website: www.acmehealth.in
";

fn engine() -> PolicyEngine {
    PolicyEngine::new().expect("standard rules compile")
}

fn fixed_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

#[test]
fn test_identification_amounts_and_waiting_period() {
    let analysis = engine().analyze(
        "Policy Number: ABC-123. Sum Insured Rs. 5,00,000 and Rs. 2,00,000. Waiting period of 30 days applies.",
    );
    assert!(analysis
        .policy_identification
        .iter()
        .any(|m| m.value == "ABC-123"));
    let amounts: Vec<f64> = analysis.coverage_amounts.iter().map(|a| a.value).collect();
    assert_eq!(amounts, vec![500000.0, 200000.0]);
    assert_eq!(analysis.waiting_periods.len(), 1);
    assert!(analysis.waiting_periods[0].span_text.contains("30 days"));
}

#[test]
fn test_sum_insured_ignores_member_counts_and_ages() {
    let analysis =
        engine().analyze("Sum Insured Rs. 5,00,000 for a family of 4 members aged 18 to 65 years.");
    let amounts: Vec<f64> = analysis.coverage_amounts.iter().map(|a| a.value).collect();
    assert_eq!(amounts, vec![500000.0]);
}

#[test]
fn test_labelled_benefit_stays_out_of_summary_benefits() {
    let output = engine().process_at(
        "Room charges are covered up to one percent of sum insured.",
        &fixed_time(),
    );
    assert_eq!(output.analysis.key_benefits.get(BenefitKind::Hospitalization).len(), 1);
    assert!(!output.summary.content.contains("Key Benefits"));
    assert!(output
        .report
        .content
        .contains("\nHospitalization:\n- Room charges are covered up to one percent of sum insured\n"));
}

#[test]
fn test_short_standard_exclusions_reach_summary() {
    let output = engine().process_at(
        "General Exclusions: war risks. Standard exclusions: AIDS.",
        &fixed_time(),
    );
    assert!(output.analysis.key_exclusions.is_empty());
    assert!(output
        .summary
        .content
        .contains("- Standard Exclusions:\n  * war risks\n  * AIDS\n"));
}

#[test]
fn test_empty_text_degrades_to_boilerplate() {
    let output = engine().process_at("", &fixed_time());
    assert!(output.analysis.is_empty());

    let summary = &output.summary.content;
    assert!(summary.contains("- Policy Name: Total Health Plan\n"));
    assert!(summary.contains("- Policy Type: Health Insurance\n"));
    assert!(summary.contains("- Payment Options: Annual, Half-yearly, Quarterly\n"));

    let report = &output.report.content;
    for category in Category::ALL {
        let header = format!("{}. {}\n{}\n", category.number(), category.title(), "-".repeat(30));
        assert!(report.contains(&header), "missing header {}", header);
    }
    assert!(!report.contains("\n- "));
    assert!(output.visualization.coverage_amounts.is_empty());
}

#[test]
fn test_hospital_and_treatment_goes_to_hospitalization() {
    let analysis = engine().analyze("Benefits include hospital treatment for accidents.");
    assert_eq!(analysis.key_benefits.get(BenefitKind::Hospitalization).len(), 1);
    assert_eq!(analysis.key_benefits.get(BenefitKind::Treatment).len(), 0);
}

#[test]
fn test_twenty_exclusions_keep_first_three() {
    let text: String = (1..=20)
        .map(|i| format!("General Exclusions: exclusion item number {:02}. ", i))
        .collect();
    let analysis = engine().analyze(&text);
    let kept: Vec<_> = analysis
        .key_exclusions
        .get(ExclusionKind::General)
        .iter()
        .map(|m| m.value.as_str())
        .collect();
    assert_eq!(
        kept,
        vec![
            "exclusion item number 01",
            "exclusion item number 02",
            "exclusion item number 03"
        ]
    );
}

#[test]
fn test_sample_policy_analysis() {
    let analysis = engine().analyze(SAMPLE_POLICY);

    let amounts: Vec<f64> = analysis.coverage_amounts.iter().map(|a| a.value).collect();
    assert_eq!(amounts, vec![1000000.0, 500000.0, 300000.0]);

    assert!(analysis
        .policy_identification
        .iter()
        .any(|m| m.value == "THP/2024/0042"));
    assert_eq!(
        analysis.key_benefits.get(BenefitKind::Hospitalization)[0].rule,
        "hospitalization_benefits"
    );
    assert_eq!(analysis.key_benefits.get(BenefitKind::Treatment)[0].rule, "day_care");
    assert!(!analysis.key_exclusions.get(ExclusionKind::Treatments).is_empty());
    assert_eq!(analysis.special_features.get(FeatureKind::Discounts).len(), 1);
    assert_eq!(analysis.special_features.get(FeatureKind::SpecialFeatures)[0].rule, "no_claim_bonus");
    assert_eq!(analysis.waiting_periods.len(), 2);
}

#[test]
fn test_sample_policy_summary() {
    let output = engine().process_at(SAMPLE_POLICY, &fixed_time());
    let summary = &output.summary.content;

    assert!(summary.starts_with("POLICY DOCUMENT SUMMARY\n"));
    assert!(summary.contains("Generated on: 2024-05-01 10:30:00\n"));
    assert!(summary.contains("- Insurer: Acme Health Insurance Company Limited\n"));
    assert!(summary.contains("- IRDAI Registration: 123\n"));
    assert!(summary.contains("- CIN: U66000MH2000PLC123456\n"));
    assert!(summary.contains("- Registered Office: 12 Marine Drive, Mumbai 400020\n"));
    assert!(summary.contains("- Sum Insured Options:\n  * Rs. 3,00,000, Rs. 5,00,000 and Rs. 10,00,000\n"));
    assert!(summary.contains("- Grace Period: 30 days from the due date\n"));
    assert!(summary.contains("- Standard Exclusions:\n  * war, nuclear risks and self-inflicted injury\n"));
    assert!(summary.contains("- Required Documents:\n  * reimbursement include the discharge summary\n"));
    assert!(summary.contains("- Toll Free: 1800 425 2255\n"));
    assert!(summary.contains("- Email: care@acmehealth.in\n"));
    assert!(summary.contains("- Website: www.acmehealth.in\n"));
    assert!(summary.ends_with("complete terms, conditions, and details."));
}

#[test]
fn test_sample_policy_report_lists_amounts() {
    let output = engine().process_at(SAMPLE_POLICY, &fixed_time());
    assert!(output.report.content.contains(
        "\nSum Insured Amounts:\n- Rs. 10,00,000\n- Rs. 5,00,000\n- Rs. 3,00,000\n"
    ));
    assert!(output.report.content.contains("\nDiscounts:\n- Premium discounts of 10% apply for two year policies\n"));
}

#[test]
fn test_renders_differ_only_in_timestamp() {
    let engine = engine();
    let first = engine.process_at(SAMPLE_POLICY, &fixed_time());
    let later = NaiveDate::from_ymd_opt(2025, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    let second = engine.process_at(SAMPLE_POLICY, &later);

    let strip = |s: &str| {
        s.lines()
            .filter(|l| !l.starts_with("Generated on:"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_ne!(first.summary.content, second.summary.content);
    assert_eq!(strip(&first.summary.content), strip(&second.summary.content));
    assert_eq!(strip(&first.report.content), strip(&second.report.content));
    assert_eq!(first.analysis, second.analysis);
}

#[test]
fn test_config_profile_reaches_summary() {
    let config = PipelineConfig::from_str(
        "[summary]\npolicy_name = \"Care Supreme\"\npolicy_type = \"Family Floater\"\n",
    )
    .unwrap();
    let engine = PolicyEngine::with_config(config).unwrap();
    let output = engine.process_at("", &fixed_time());
    assert!(output
        .summary
        .content
        .contains("- Policy Name: Care Supreme\n- Policy Type: Family Floater\n"));
}

#[test]
fn test_artifacts_written_to_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = engine().process_at(SAMPLE_POLICY, &fixed_time());
    let mut sink = DirectorySink::new(dir.path());
    output.write_to(&mut sink).unwrap();

    for name in ["simplified_text.txt", "analysis_report.txt", "visualization_input.json"] {
        assert!(dir.path().join(name).exists(), "{} not written", name);
    }
    let summary = std::fs::read_to_string(dir.path().join("simplified_text.txt")).unwrap();
    assert_eq!(summary, output.summary.content);

    let feed: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("visualization_input.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(feed["coverage_amounts"][0], 1000000.0);
}
