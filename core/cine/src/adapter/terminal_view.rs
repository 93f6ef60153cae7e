//! 端末に描画する SearchView 実装
//!
//! 端末は追記しかできないため「隠す」操作は何も出力しない。
//! 映画カードは render_movie で受け取っておき、set_movie_visible(true) の時点で出す。

use crate::domain::MovieCard;
use crate::ports::outbound::SearchView;
use std::io::{self, Write};

pub struct TerminalView<W: Write + Send> {
    out: W,
    card: Option<MovieCard>,
    input: String,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            card: None,
            input: String::new(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_card(&mut self) {
        let Some(card) = self.card.as_ref() else {
            return;
        };
        let mut text = String::new();
        text.push_str(&format!("\n{} ({})\n", card.title, card.year));
        if let Some(rating) = &card.rating {
            text.push_str(&format!("  Rating:   {}\n", rating));
        }
        text.push_str(&format!("  Runtime:  {}\n", card.runtime));
        text.push_str(&format!("  Genre:    {}\n", card.genre));
        text.push_str(&format!("  Director: {}\n", card.director));
        text.push_str(&format!("  Actors:   {}\n", card.actors));
        text.push_str(&format!("  Poster:   {} [{}]\n", card.poster_url, card.poster_alt));
        text.push_str(&format!("  Plot:     {}\n\n", card.plot));
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }
}

impl<W: Write + Send> SearchView for TerminalView<W> {
    fn render_movie(&mut self, card: &MovieCard) {
        self.card = Some(card.clone());
    }

    fn render_history(&mut self, entries: &[String]) {
        if entries.is_empty() {
            return;
        }
        let mut text = String::from("Recent searches:\n");
        for (i, entry) in entries.iter().enumerate() {
            text.push_str(&format!("  {}. {}\n", i + 1, entry));
        }
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            let _ = writeln!(self.out, "Searching...");
            let _ = self.out.flush();
        }
    }

    fn set_error(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            let _ = writeln!(self.out, "Error: {}", message);
            let _ = self.out.flush();
        }
    }

    fn set_movie_visible(&mut self, visible: bool) {
        if visible {
            self.write_card();
        }
    }

    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn focus_input(&mut self) {
        // 入力は次のプロンプトで受け付けるので、クリアしたことだけ伝える
        if self.input.is_empty() {
            let _ = writeln!(self.out, "(input cleared)");
            let _ = self.out.flush();
        }
    }

    fn show_notice(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rating: Option<&str>) -> MovieCard {
        MovieCard {
            poster_url: "https://via.placeholder.com/x".to_string(),
            poster_alt: "Inception Poster".to_string(),
            title: "Inception".to_string(),
            year: "2010".to_string(),
            runtime: "148 min".to_string(),
            genre: "Sci-Fi".to_string(),
            plot: "Dreams.".to_string(),
            director: "Christopher Nolan".to_string(),
            actors: "Leonardo DiCaprio".to_string(),
            rating: rating.map(str::to_string),
        }
    }

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_card_printed_only_when_visible() {
        let mut view = TerminalView::new(Vec::new());
        view.render_movie(&card(Some("8.8")));
        view.set_movie_visible(false);
        assert_eq!(output(view), "");

        let mut view = TerminalView::new(Vec::new());
        view.render_movie(&card(Some("8.8")));
        view.set_movie_visible(true);
        let out = output(view);
        assert!(out.contains("Inception (2010)"));
        assert!(out.contains("Rating:   8.8"));
        assert!(out.contains("Poster:   https://via.placeholder.com/x [Inception Poster]"));
    }

    #[test]
    fn test_rating_badge_hidden_when_none() {
        let mut view = TerminalView::new(Vec::new());
        view.render_movie(&card(None));
        view.set_movie_visible(true);
        assert!(!output(view).contains("Rating"));
    }

    #[test]
    fn test_history_section_hidden_when_empty() {
        let mut view = TerminalView::new(Vec::new());
        view.render_history(&[]);
        assert_eq!(output(view), "");

        let mut view = TerminalView::new(Vec::new());
        view.render_history(&["Up".to_string(), "Heat".to_string()]);
        assert_eq!(output(view), "Recent searches:\n  1. Up\n  2. Heat\n");
    }

    #[test]
    fn test_error_and_loading() {
        let mut view = TerminalView::new(Vec::new());
        view.set_error(None);
        view.set_loading(false);
        view.set_loading(true);
        view.set_error(Some("Movie not found!"));
        assert_eq!(output(view), "Searching...\nError: Movie not found!\n");
    }
}
