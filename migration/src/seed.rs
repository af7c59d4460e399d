//! Default trivia data set.
//!
//! Loaded by the `seed` command and by the integration tests. Seeding is a
//! no-op when the `categories` table already has rows.

use entity::{categories, questions};
use sea_orm_migration::sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Set,
    TransactionTrait,
};
use std::collections::HashMap;

pub const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub struct SeedQuestion {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
    pub difficulty: i32,
}

macro_rules! seed_questions {
    ($(($question:literal, $answer:literal, $category:literal, $difficulty:literal)),* $(,)?) => {
        &[$(SeedQuestion {
            question: $question,
            answer: $answer,
            category: $category,
            difficulty: $difficulty,
        }),*]
    };
}

pub const QUESTIONS: &[SeedQuestion] = seed_questions![
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", "History", 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", "History", 1),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", "Entertainment", 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", "Entertainment", 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", "Entertainment", 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", "Sports", 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", "Sports", 4),
    ("Who invented Peanut Butter?", "George Washington Carver", "History", 2),
    ("What is the largest lake in Africa?", "Lake Victoria", "Geography", 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", "Geography", 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", "Geography", 2),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", "Art", 1),
    ("La Giaconda is better known as what?", "Mona Lisa", "Art", 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", "Art", 4),
    ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", "Art", 2),
    ("What is the heaviest organ in the human body?", "The Liver", "Science", 4),
    ("Who discovered penicillin?", "Alexander Fleming", "Science", 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", "Science", 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", "History", 4),
];

/// Inserts the default categories and questions.
///
/// Returns `false` without touching anything if categories already exist.
pub async fn seed<C>(conn: &C) -> Result<bool, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = conn.begin().await?;

    if categories::Entity::find().count(&txn).await? > 0 {
        tracing::info!("categories already present, skipping seed");
        return Ok(false);
    }

    let mut ids = HashMap::with_capacity(CATEGORIES.len());

    for kind in CATEGORIES {
        let category = categories::ActiveModel {
            kind: Set(kind.to_owned()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        ids.insert(kind, category.id);
    }

    let models = QUESTIONS
        .iter()
        .map(|seed| {
            let category = ids.get(seed.category).copied().ok_or_else(|| {
                DbErr::Custom(format!("unknown seed category: {}", seed.category))
            })?;

            Ok::<_, DbErr>(questions::ActiveModel {
                question: Set(seed.question.to_owned()),
                answer: Set(seed.answer.to_owned()),
                category: Set(category),
                difficulty: Set(seed.difficulty),
                ..Default::default()
            })
        })
        .collect::<Result<Vec<_>, DbErr>>()?;

    questions::Entity::insert_many(models).exec(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        "seeded {} categories and {} questions",
        CATEGORIES.len(),
        QUESTIONS.len()
    );

    Ok(true)
}
