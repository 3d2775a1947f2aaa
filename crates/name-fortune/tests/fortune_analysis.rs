use name_fortune::config::EngineConfig;
use name_fortune::fortune::{
    AnalysisDepth, AnalysisRequest, AnalysisWarning, FortuneEngine, FortuneError,
    FortuneTables, FortuneTier, LifeAspect, StrokeTable, StrokeTableError,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

fn scratch_csv(label: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "name-fortune-{label}-{}.csv",
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("scratch csv written");
    path
}

#[test]
fn compound_surname_report_uses_both_surname_characters() {
    let engine = FortuneEngine::standard();
    let report = engine
        .analyze(&AnalysisRequest::new("司马云山").with_depth(AnalysisDepth::Detailed))
        .expect("analysis succeeds");

    assert!(report.name_structure.is_compound_surname());
    assert_eq!(report.name_structure.surname, "司马");
    assert_eq!(report.five_grids.heaven.value, 15);
    assert_eq!(report.five_grids.person.value, 14);
    assert_eq!(report.five_grids.total.value, report.stroke_counts.total);
    assert_eq!(report.numerology_analysis.len(), 5);
    assert!(report.overall_score.score <= 100);
}

#[test]
fn configured_stroke_table_overrides_fallbacks() {
    let path = scratch_csv("override", "character,strokes\n燚,16\n");
    let config = EngineConfig {
        fallback_strokes: 10,
        stroke_table: Some(path.clone()),
    };

    let engine = FortuneEngine::from_config(&config).expect("table loads");
    let report = engine
        .analyze(&AnalysisRequest::new("李燚"))
        .expect("analysis succeeds");
    std::fs::remove_file(&path).ok();

    assert_eq!(report.stroke_counts.total, 7 + 16);
    assert!(report.warnings.is_empty());
}

#[test]
fn configured_fallback_applies_to_unknown_characters() {
    let config = EngineConfig {
        fallback_strokes: 5,
        stroke_table: None,
    };
    let engine = FortuneEngine::from_config(&config).expect("engine builds");
    let report = engine
        .analyze(&AnalysisRequest::new("李燚"))
        .expect("analysis succeeds");

    assert_eq!(report.stroke_counts.total, 7 + 5);
    assert_eq!(
        report.warnings,
        vec![AnalysisWarning::UnknownCharacter {
            character: '燚',
            fallback_strokes: 5,
        }]
    );
}

#[test]
fn malformed_stroke_table_is_rejected_with_line() {
    let path = scratch_csv("malformed", "character,strokes\n明,8\n云山,7\n");
    let config = EngineConfig {
        fallback_strokes: 10,
        stroke_table: Some(path.clone()),
    };

    let error = FortuneEngine::from_config(&config).expect_err("multi-character entry");
    std::fs::remove_file(&path).ok();

    match error {
        StrokeTableError::InvalidEntry { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_stroke_table_surfaces_io_error() {
    let config = EngineConfig {
        fallback_strokes: 10,
        stroke_table: Some(PathBuf::from("/nonexistent/name-fortune/strokes.csv")),
    };

    let error = FortuneEngine::from_config(&config).expect_err("file missing");
    assert!(matches!(error, StrokeTableError::Io(_)));
}

#[test]
fn tables_accept_in_memory_overrides() {
    let mut strokes = StrokeTable::default();
    let loaded = strokes
        .extend_from_reader("character,strokes\n燚,16\n鑫,24\n".as_bytes())
        .expect("csv parses");
    assert_eq!(loaded, 2);

    let engine = FortuneEngine::new(Arc::new(FortuneTables::with_strokes(strokes)));
    let report = engine
        .analyze(&AnalysisRequest::new("王鑫"))
        .expect("analysis succeeds");
    assert_eq!(report.stroke_counts.total, 4 + 24);
}

#[test]
fn shared_engine_is_deterministic_across_threads() {
    let engine = Arc::new(FortuneEngine::standard());
    let expected = serde_json::to_string(
        &engine
            .analyze(&AnalysisRequest::new("王德华"))
            .expect("analysis succeeds"),
    )
    .expect("report serializes");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let report = engine
                    .analyze(&AnalysisRequest::new("王德华"))
                    .expect("analysis succeeds");
                serde_json::to_string(&report).expect("report serializes")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("worker finishes"), expected);
    }
}

#[test]
fn request_json_defaults_to_full_comprehensive_analysis() {
    let request: AnalysisRequest =
        serde_json::from_str(r#"{"fullName":"李明"}"#).expect("request parses");
    assert_eq!(request.analysis_type, AnalysisDepth::Comprehensive);
    assert_eq!(request.include_aspects, vec!["all"]);
    assert!(request.include_predictions);
    assert!(request.include_advice);

    let narrowed: AnalysisRequest = serde_json::from_str(
        r#"{"fullName":"李明","analysisType":"basic","includeAspects":["wealth","事业运"]}"#,
    )
    .expect("request parses");
    let report = FortuneEngine::standard()
        .analyze(&narrowed)
        .expect("analysis succeeds");
    assert_eq!(
        report.aspect_analysis.keys().copied().collect::<Vec<_>>(),
        vec![LifeAspect::Career, LifeAspect::Wealth]
    );
    assert_eq!(report.age_analysis.len(), 5);

    let unknown: AnalysisRequest =
        serde_json::from_str(r#"{"fullName":"李明","includeAspects":["fame"]}"#)
            .expect("aspect names are checked during analysis");
    assert_eq!(
        FortuneEngine::standard()
            .analyze(&unknown)
            .expect_err("unknown aspect"),
        FortuneError::UnknownAspect("fame".to_string())
    );
}

#[test]
fn numerology_lookup_wraps_and_rejects_zero() {
    let engine = FortuneEngine::standard();
    assert_eq!(engine.numerology(82).expect("wraps").number, 1);
    assert_eq!(engine.numerology(1).expect("known").tier, FortuneTier::Great);
    assert_eq!(
        engine.numerology(0).expect_err("zero"),
        FortuneError::InvalidGridValue(0)
    );
}
