//! Comic list controller — fetch and local mutation for the active view.

use crate::api::ApiClient;
use crate::error::Result;
use crate::model::{Comic, Generated, View};

/// The one list of comics a surface renders, tied to an active view.
///
/// The list is server-authoritative: `refresh` replaces it wholesale in
/// server order. The like toggle is the only local mutation, and a
/// refresh landing after a toggle overwrites it with server state —
/// that is the reconciliation point.
pub struct ComicLibrary {
    api: ApiClient,
    view: View,
    comics: Vec<Comic>,
}

impl ComicLibrary {
    pub fn new(api: ApiClient, view: View) -> Self {
        Self {
            api,
            view,
            comics: Vec::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn comics(&self) -> &[Comic] {
        &self.comics
    }

    /// Replace the held list with the server's current ordering.
    pub async fn refresh(&mut self) -> Result<()> {
        self.comics = self.api.list_comics(self.view).await?;
        Ok(())
    }

    /// Switch the active view and refresh it.
    pub async fn set_view(&mut self, view: View) -> Result<()> {
        self.view = view;
        self.refresh().await
    }

    /// Generate a new comic. Afterwards the creation is visible without a
    /// manual refresh: the current view is re-fetched when it already
    /// shows own or public comics, otherwise the active view switches to
    /// the library.
    pub async fn generate(&mut self, prompt: &str) -> Result<Generated> {
        let generated = self.api.generate(prompt).await?;
        match self.view {
            View::Library | View::Explore => self.refresh().await?,
            View::Top | View::Liked => self.set_view(View::Library).await?,
        }
        Ok(generated)
    }

    /// Toggle the like on a comic.
    ///
    /// The local flip is applied before the remote call and reverted if
    /// the call fails.
    pub async fn toggle_like(&mut self, comic_id: &str) -> Result<()> {
        let applied = apply_toggle(&mut self.comics, comic_id);
        match self.api.toggle_like(comic_id).await {
            Ok(_) => Ok(()),
            Err(e) => {
                if applied {
                    apply_toggle(&mut self.comics, comic_id);
                }
                Err(e)
            }
        }
    }
}

/// Flip `is_liked` on the matching comic, adjusting the like count by one.
/// Returns whether a comic matched. The count only decrements when the
/// prior state was liked, so it never goes negative.
fn apply_toggle(comics: &mut [Comic], comic_id: &str) -> bool {
    match comics.iter_mut().find(|c| c.id == comic_id) {
        Some(comic) => {
            if comic.is_liked {
                comic.likes = comic.likes.saturating_sub(1);
            } else {
                comic.likes += 1;
            }
            comic.is_liked = !comic.is_liked;
            true
        }
        None => false,
    }
}
