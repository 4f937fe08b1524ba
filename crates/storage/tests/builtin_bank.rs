use quiz_core::model::{ChapterId, Difficulty};
use storage::Storage;
use storage::repository::{ChapterCatalog, LeaderboardRepository, QuestionBank};

#[test]
fn builtin_bank_matches_chapter_catalog() {
    let storage = Storage::mock().expect("mock storage");
    let bank_ids = storage.questions.chapter_ids().expect("chapter ids");
    let catalog = storage.chapters.list_chapters().expect("chapters");

    assert_eq!(bank_ids.len(), 10);
    let catalog_ids: Vec<ChapterId> = catalog.iter().map(|c| c.id().clone()).collect();
    assert_eq!(bank_ids, catalog_ids);

    for id in &bank_ids {
        let pool = storage.questions.all_chapter_questions(id).expect("pool");
        assert_eq!(pool.len(), 5, "chapter {id} pool size");
        assert!(pool.iter().all(|q| q.chapter() == id));
    }
}

#[test]
fn builtin_batch_cycles_five_question_pool() {
    let storage = Storage::mock().expect("mock storage");
    let chapter = ChapterId::new("intro-computer");
    let batch = storage
        .questions
        .questions_by_chapter(&chapter, 50)
        .expect("batch");

    assert_eq!(batch.len(), 50);
    assert_eq!(batch[0].id().as_str(), "ic001_0");
    assert_eq!(batch[5].id().as_str(), "ic001_5");
    assert_eq!(batch[45].id().as_str(), "ic001_45");
    assert_eq!(batch[0].prompt(), "What does CPU stand for?");
    assert_eq!(batch[45].prompt(), batch[0].prompt());
    assert_eq!(batch[49].id().as_str(), "ic005_49");
}

#[test]
fn builtin_bank_has_hard_questions_in_spreadsheet() {
    let storage = Storage::mock().expect("mock storage");
    let hard = storage
        .questions
        .questions_by_difficulty(&ChapterId::new("spreadsheet"), Difficulty::Hard)
        .expect("hard questions");
    assert_eq!(hard.len(), 1);
}

#[test]
fn mock_leaderboard_keeps_source_order() {
    let storage = Storage::mock().expect("mock storage");
    let entries = storage.leaderboard.list_entries().expect("entries");
    let ranks: Vec<u32> = entries.iter().map(|e| e.rank()).collect();
    assert_eq!(ranks, [1, 2, 3, 4, 5]);
    assert_eq!(entries[0].name(), "Raj Patel");
}
