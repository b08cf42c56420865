//! Demo content inserted once into an empty store (sport highlights theme).

use crate::db::DbPool;
use crate::http_error::AppError;
use crate::plugins::stories::models::{NewStory, Page};
use crate::plugins::stories::repo;

pub fn seed_stories() -> Vec<NewStory> {
    vec![
        NewStory {
            title: "Derby Day".to_string(),
            category: "highlights".to_string(),
            cover_url: "https://images.unsplash.com/photo-1489944440615-453fc2b6a9a9?w=400".to_string(),
            pages: vec![
                Page::image("https://images.unsplash.com/photo-1459865264687-595d652de67e?w=800", "Stadium atmosphere before kickoff"),
                Page::image("https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=800", "Goal! The crowd goes wild"),
                Page::image("https://images.unsplash.com/photo-1522778119026-d647f0596c20?w=800", "Victory celebration"),
            ],
        },
        NewStory {
            title: "Top Saves".to_string(),
            category: "highlights".to_string(),
            cover_url: "https://images.unsplash.com/photo-1431324155629-1a6deb1dec8d?w=400".to_string(),
            pages: vec![
                Page::image("https://images.unsplash.com/photo-1551958219-acbc608c6377?w=800", "Incredible diving save"),
                Page::image("https://images.unsplash.com/photo-1606925797300-0b35e9d1794e?w=800", "Fingertip save at the last moment"),
                Page::image("https://images.unsplash.com/photo-1560272564-c83b66b1ad12?w=800", "Save of the season"),
            ],
        },
    ]
}

/// Inserts [`seed_stories`] in one transaction unless any story exists.
/// Returns how many stories were inserted (0 when skipped).
///
/// Only "is the table empty" is checked; rows are never merged or upserted.
pub async fn seed_if_empty(pool: &DbPool) -> Result<usize, AppError> {
    let mut tx = pool.begin().await.map_err(AppError::from)?;

    if repo::any_story(&mut *tx).await? {
        tracing::info!("database already has stories, skipping seed");
        return Ok(0);
    }

    let stories = seed_stories();
    for story in &stories {
        repo::insert_story(&mut *tx, story).await?;
    }
    tx.commit().await.map_err(AppError::from)?;

    tracing::info!("seeded {} stories", stories.len());
    Ok(stories.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;

    #[test]
    fn fixture_has_two_highlight_stories_with_pages() {
        let stories = seed_stories();
        assert_eq!(stories.len(), 2);
        for s in &stories {
            assert_eq!(s.category, "highlights");
            assert!((2..=3).contains(&s.pages.len()));
        }
    }

    #[tokio::test]
    async fn seeding_twice_is_a_noop() -> anyhow::Result<()> {
        let pool = init_db("sqlite::memory:").await?;
        assert_eq!(seed_if_empty(&pool).await?, 2);
        assert_eq!(seed_if_empty(&pool).await?, 0);
        assert_eq!(repo::count_stories(&pool).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn non_empty_store_is_left_alone() -> anyhow::Result<()> {
        let pool = init_db("sqlite::memory:").await?;
        let custom = NewStory {
            title: "Custom".into(),
            category: "other".into(),
            cover_url: "https://img.test/c.jpg".into(),
            pages: vec![],
        };
        repo::insert_story(&pool, &custom).await?;

        assert_eq!(seed_if_empty(&pool).await?, 0);
        let all = repo::list_stories(&pool, None).await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Custom");
        Ok(())
    }
}
