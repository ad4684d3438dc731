use academy_core::View;
use academy_core::model::ModuleId;

use super::test_harness::{pass_current_module, setup_shell};

#[test]
fn first_module_renders_lessons_quiz_and_locked_gate() {
    let html = setup_shell(|_| {}).render();

    assert!(html.contains("Introduction: The Era of Intent"), "{html}");
    assert!(html.contains("Module 1 of 6"), "{html}");
    assert!(html.contains("Lesson 1:"), "{html}");
    assert!(html.contains("The Vibe Coding Lifecycle"), "{html}");
    assert!(html.contains("Vibe Check Quiz"), "{html}");
    assert!(html.contains("Check My Vibe"), "{html}");
    assert!(
        html.contains("Pass the Vibe Check to unlock the next module."),
        "{html}"
    );
    assert!(!html.contains("Previous Module"), "{html}");
}

#[test]
fn sidebar_shows_xp_learner_and_locked_certificate_link() {
    let html = setup_shell(|_| {}).render();

    assert!(html.contains("Vibe Academy"), "{html}");
    assert!(html.contains("0 XP"), "{html}");
    assert!(html.contains("Ada Lovelace"), "{html}");
    assert!(html.contains("Module 6"), "{html}");
    assert!(html.contains("nav-item is-locked"), "{html}");
}

#[test]
fn perfect_quiz_unlocks_the_next_module() {
    let html = setup_shell(pass_current_module).render();

    assert!(html.contains("Vibe Verified!"), "{html}");
    assert!(html.contains("Begin Next Module"), "{html}");
    assert!(html.contains("500 XP"), "{html}");
    assert!(html.contains("is-correct"), "{html}");
}

#[test]
fn wrong_answers_offer_a_retry() {
    let html = setup_shell(|session| {
        let total = session.attempt().quiz().questions().len();
        for question in 0..total {
            let wrong = (session.attempt().quiz().questions()[question].correct_index() + 1) % 2;
            session.select_answer(question, wrong).unwrap();
        }
        session.submit_quiz().unwrap();
    })
    .render();

    assert!(html.contains("Try Again to Unlock Next Module"), "{html}");
    assert!(html.contains("is-wrong"), "{html}");
    assert!(html.contains("0 / 3"), "{html}");
}

#[test]
fn later_module_shows_previous_link_and_waiter_diagram() {
    let html = setup_shell(|session| {
        session
            .select_module(&ModuleId::new("automation").unwrap())
            .unwrap();
    })
    .render();

    assert!(html.contains("Module 5 of 6"), "{html}");
    assert!(html.contains("The API Waiter Concept"), "{html}");
    assert!(html.contains("Previous Module"), "{html}");
}

#[test]
fn final_module_waits_for_the_whole_curriculum() {
    let html = setup_shell(|session| {
        session
            .select_module(&ModuleId::new("final-project").unwrap())
            .unwrap();
        pass_current_module(session);
    })
    .render();

    assert!(html.contains("Launch Checklist"), "{html}");
    assert!(
        html.contains("Complete every module to claim your certificate."),
        "{html}"
    );
}

#[test]
fn graduation_renders_the_certificate() {
    let html = setup_shell(|session| {
        let ids = session.catalog().ids();
        for id in &ids {
            session.select_module(id).unwrap();
            pass_current_module(session);
        }
        assert!(session.advance().is_moved());
    })
    .render();

    assert!(html.contains("Congratulations, Vibe Architect!"), "{html}");
    assert!(html.contains("Certificate of Professional Intent"), "{html}");
    assert!(html.contains("Ada Lovelace"), "{html}");
    assert!(html.contains("November 14, 2023"), "{html}");
    assert!(html.contains("3000 XP Mastery"), "{html}");
    assert!(html.contains("Review All Modules"), "{html}");
}

#[test]
fn library_highlights_template_placeholders() {
    let html = setup_shell(|session| {
        session.select_view(View::Library);
    })
    .render();

    assert!(html.contains("Prompt Library"), "{html}");
    assert!(html.contains("The Toolkit"), "{html}");
    assert!(html.contains("class=\"placeholder\""), "{html}");
    assert!(html.contains("Copy Prompt"), "{html}");
}

#[test]
fn glossary_and_case_studies_render_their_entries() {
    let glossary = setup_shell(|session| {
        session.select_view(View::Glossary);
    })
    .render();
    assert!(glossary.contains("Search terms"), "{glossary}");
    assert!(glossary.contains("glossary__entry"), "{glossary}");

    let cases = setup_shell(|session| {
        session.select_view(View::CaseStudies);
    })
    .render();
    assert!(cases.contains("The Vibe"), "{cases}");
    assert!(cases.contains("The Outcome"), "{cases}");
}

#[test]
fn creative_tools_explain_a_missing_backend() {
    let sandbox = setup_shell(|session| {
        session.select_view(View::Sandbox);
    })
    .render();
    assert!(sandbox.contains("Image Manifestor"), "{sandbox}");
    assert!(sandbox.contains("Vibe Generator"), "{sandbox}");
    assert!(sandbox.contains("ACADEMY_AI_API_KEY"), "{sandbox}");

    let auditor = setup_shell(|session| {
        session.select_view(View::Auditor);
    })
    .render();
    assert!(auditor.contains("Audit My Prompt"), "{auditor}");
    assert!(auditor.contains("ACADEMY_AI_API_KEY"), "{auditor}");
}
