use anyhow::Result;
use orientation_engine::{
    AnswerSheet, CatalogData, EngineSettings, RecommendationEngine, ScoreVector,
};
use std::sync::Arc;
use std::thread;

fn builtin_engine() -> Result<RecommendationEngine> {
    Ok(RecommendationEngine::with_builtin_data(
        EngineSettings::default(),
    )?)
}

#[test]
fn test_programming_and_math_rank_tech_math_programs_first() -> Result<()> {
    let engine = builtin_engine()?;
    let answers = AnswerSheet::new()
        .with_answer("q1", "Me gusta programar")
        .with_answer("q2", "Las matemáticas son lo mío");

    let scores = engine.analyze(&answers);
    assert!(scores.get("tecnologia") > 0);
    assert!(scores.get("matematicas") > 0);

    let ranked = engine.rank(&scores);
    let top = &ranked[0].program;
    assert!(top.is_tagged("tecnologia") && top.is_tagged("matematicas"));
    assert_eq!(top.id, "ingenieria-sistemas");

    let health_only = engine
        .catalog()
        .programs()
        .iter()
        .filter(|p| p.area_tags.iter().all(|tag| tag == "salud"))
        .collect::<Vec<_>>();
    assert!(!health_only.is_empty());

    let all = engine.rank_with_limit(&scores, engine.catalog().len());
    let top_position = all.iter().position(|r| r.program.id == top.id).unwrap();
    for program in health_only {
        let position = all.iter().position(|r| r.program.id == program.id).unwrap();
        assert!(top_position < position);
        assert!(all[top_position].match_score > all[position].match_score);
    }

    Ok(())
}

#[test]
fn test_empty_answers_return_catalog_prefix() -> Result<()> {
    let engine = builtin_engine()?;
    let answers = AnswerSheet::new();

    let scores = engine.analyze(&answers);
    assert!(scores.is_all_zero());
    assert_eq!(scores.len(), engine.taxonomy().len());

    let ranked = engine.rank(&scores);
    let ids: Vec<&str> = ranked.iter().map(|r| r.program.id.as_str()).collect();
    let expected: Vec<&str> = engine
        .catalog()
        .programs()
        .iter()
        .take(5)
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, expected);
    assert!(ranked.iter().all(|r| r.match_score == 0));

    // Zero-score labels still carry their institutions.
    let institutions = engine.resolve(&engine.labels(&ranked));
    assert_eq!(
        institutions,
        vec![
            "Universidad Nacional Mayor de San Marcos",
            "Universidad de Ingeniería y Tecnología",
            "Universidad Nacional de Ingeniería",
        ]
    );

    let summary = engine.summarize(&scores, answers.len());
    assert!(summary.top_areas.is_empty());
    assert_eq!(summary.total_answers, 0);

    Ok(())
}

#[test]
fn test_parenthesized_program_name_keeps_label_without_institution() -> Result<()> {
    let engine = builtin_engine()?;
    let answers = AnswerSheet::new().with_answer("q1", "Me encanta la música");

    let assessment = engine.assess(&answers);
    let musica = assessment
        .recommendations
        .iter()
        .find(|r| r.program_name == "Música (Interpretación)")
        .expect("music program is recommended");

    assert_eq!(musica.label, "Música (Interpretación)");
    assert_eq!(
        musica.institution_name,
        "Pontificia Universidad Católica del Perú"
    );

    // Parsing the plain label only sees the name's own parenthesis.
    assert_eq!(
        engine.resolve(&[musica.label.as_str()]),
        vec!["Interpretación"]
    );
    assert!(assessment
        .institutions
        .contains(&"Pontificia Universidad Católica del Perú".to_string()));

    Ok(())
}

#[test]
fn test_small_catalog_returns_every_program_once() -> Result<()> {
    let data = CatalogData::from_toml_str(
        r#"
[[areas]]
id = "arte"
display_name = "Arte"
keywords = ["pintar"]

[[programs]]
id = "bellas-artes"
name = "Bellas Artes"
institution = "Escuela A"
areas = ["arte"]

[[programs]]
id = "diseno"
name = "Diseño"
institution = "Escuela B"
areas = ["arte"]
"#,
    )?;
    let engine = RecommendationEngine::from_data(data, EngineSettings::default())?;

    let assessment = engine.assess(&AnswerSheet::new().with_answer("q1", "pintar"));
    assert_eq!(assessment.recommendations.len(), 2);
    assert_eq!(
        assessment.labels(),
        vec!["Bellas Artes (Escuela A)", "Diseño (Escuela B)"]
    );

    Ok(())
}

#[test]
fn test_ranking_has_fixed_length_for_any_scores() -> Result<()> {
    let engine = builtin_engine()?;
    let mut scores: ScoreVector = engine.taxonomy().zero_scores();

    for (step, area) in engine.taxonomy().areas().iter().enumerate() {
        scores.set(&area.id, (step as u32 * 7) % 5);
        assert_eq!(engine.rank(&scores).len(), 5);
        assert_eq!(engine.rank_with_limit(&scores, 12).len(), 12);
    }

    Ok(())
}

#[test]
fn test_affiliation_never_empty() -> Result<()> {
    let engine = builtin_engine()?;
    let empty: Vec<String> = Vec::new();
    assert_eq!(
        engine.resolve(&empty),
        EngineSettings::default().default_institutions
    );
    assert_eq!(
        engine.resolve(&["Medicina", "Derecho"]),
        EngineSettings::default().default_institutions
    );
    Ok(())
}

#[test]
fn test_assessment_is_deterministic() -> Result<()> {
    let engine = builtin_engine()?;
    let answers = AnswerSheet::new()
        .with_answer("q1", "Quiero ayudar a las personas")
        .with_answer("q2", "Me interesa la salud y la biología")
        .with_answer("q3", "");

    let first = engine.assess(&answers);
    for _ in 0..5 {
        assert_eq!(engine.assess(&answers), first);
    }
    assert_eq!(first.summary.total_answers, 3);
    assert_eq!(first.summary.top_areas.len(), 3);

    Ok(())
}

#[test]
fn test_engine_is_shared_across_threads() -> Result<()> {
    let engine = Arc::new(builtin_engine()?);
    let answers = AnswerSheet::new().with_answer("q1", "Me gusta emprender un negocio");
    let expected = engine.assess(&answers);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let answers = answers.clone();
            thread::spawn(move || engine.assess(&answers))
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("worker thread panicked");
        assert_eq!(result, expected);
    }

    Ok(())
}

#[test]
fn test_hand_built_registries_are_normalized_before_scoring() -> Result<()> {
    use orientation_engine::{Catalog, InterestArea, Program, Taxonomy};

    let taxonomy = Taxonomy::new(vec![InterestArea {
        id: "tec".to_string(),
        display_name: "Tecnología".to_string(),
        keywords: vec!["Programar".to_string(), "programar".to_string()],
    }])?;
    let catalog = Catalog::new(
        vec![Program {
            id: "sis".to_string(),
            name: "Sistemas".to_string(),
            institution_name: "Universidad A".to_string(),
            area_tags: vec!["tec".to_string(), "tec".to_string()],
            metadata: Default::default(),
        }],
        &taxonomy,
    )?;
    let engine = RecommendationEngine::new(taxonomy, catalog, EngineSettings::default())?;

    let scores = engine.analyze(&AnswerSheet::new().with_answer("q1", "me gusta programar"));
    assert_eq!(scores.get("tec"), 1);

    let ranked = engine.rank(&scores);
    assert_eq!(ranked[0].match_score, 15);

    Ok(())
}
