use approx::assert_relative_eq;
use disparity_core::weighted;
use disparity_engine::{Aggregate, Config, Method, make_derived_metric};
use integration_tests::{Y_PRED, weighted_sum_true};
use serde::{Deserialize, Serialize};

/// A derived metric as it would appear in a settings file.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct DisparitySettings {
    aggregate: Aggregate,
    #[serde(default)]
    config: Config,
}

#[test]
fn loads_from_json() {
    let json = r#"{ "aggregate": "ratio", "config": { "method": "to_overall" } }"#;

    let settings: DisparitySettings = serde_json::from_str(json).expect("valid settings");

    assert_eq!(
        settings,
        DisparitySettings {
            aggregate: Aggregate::Ratio,
            config: Config::with_method(Method::ToOverall),
        }
    );
}

#[test]
fn loads_from_toml() {
    let toml = r#"
        aggregate = "group_max"

        [config]
        method = "between_groups"
    "#;

    let settings: DisparitySettings = toml::from_str(toml).expect("valid settings");

    assert_eq!(settings.aggregate, Aggregate::GroupMax);
    assert_eq!(settings.config, Config::default());
}

#[test]
fn missing_fields_use_defaults() {
    let from_json: DisparitySettings =
        serde_json::from_str(r#"{ "aggregate": "difference", "config": {} }"#)
            .expect("valid settings");
    let from_toml: DisparitySettings =
        toml::from_str(r#"aggregate = "difference""#).expect("valid settings");

    assert_eq!(from_json.config.method, Method::BetweenGroups);
    assert_eq!(from_json, from_toml);
}

#[test]
fn unknown_method_is_rejected() {
    let result: Result<DisparitySettings, _> =
        serde_json::from_str(r#"{ "aggregate": "ratio", "config": { "method": "pairwise" } }"#);

    assert!(result.is_err());
}

#[test]
fn settings_survive_toml() {
    let settings = DisparitySettings {
        aggregate: Aggregate::Difference,
        config: Config::with_method(Method::ToOverall),
    };

    let text = toml::to_string(&settings).expect("serializable settings");
    let parsed: DisparitySettings = toml::from_str(&text).expect("valid settings");

    assert_eq!(parsed, settings);
}

#[test]
fn loaded_settings_drive_a_derived_metric() {
    let settings: DisparitySettings = serde_json::from_str(
        r#"{ "aggregate": "difference", "config": { "method": "to_overall" } }"#,
    )
    .expect("valid settings");

    let derived = make_derived_metric(settings.aggregate, weighted(weighted_sum_true))
        .with_config(settings.config);
    let difference = derived
        .call_weighted(
            [1, 1, 1, 1, 0, 0, 0, 0],
            Y_PRED,
            [0, 0, 1, 1, 1, 1, 1, 1],
            [1.0; 8],
        )
        .expect("scalar metric");

    // Overall 4, groups 2 / 2.
    assert_relative_eq!(difference, 2.0);
}
