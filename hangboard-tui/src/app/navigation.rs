use super::*;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

impl App {
    /// Move selection down in the protocol list
    pub fn select_next(&mut self) {
        if self.filtered_protocols.is_empty() {
            return;
        }
        if self.selected_protocol_index < self.filtered_protocols.len() - 1 {
            self.selected_protocol_index += 1;
        }
    }

    /// Move selection up in the protocol list
    pub fn select_previous(&mut self) {
        self.selected_protocol_index = self.selected_protocol_index.saturating_sub(1);
    }

    /// Filter protocols based on search input using fuzzy matching
    pub fn filter_protocols(&mut self) {
        let all = self.catalog.all().map(|(o, p)| (o, p.clone()));
        if self.search_input.value.is_empty() {
            self.filtered_protocols = all.collect();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<((Origin, Protocol), i64)> = all
                .filter_map(|entry| {
                    matcher
                        .fuzzy_match(entry.1.name(), &self.search_input.value)
                        .map(|score| (entry, score))
                })
                .collect();

            scored.sort_by(|a, b| b.1.cmp(&a.1));
            self.filtered_protocols = scored.into_iter().map(|(e, _)| e).collect();
        }
        self.selected_protocol_index = 0;
    }

    pub fn search_input_char(&mut self, c: char) {
        self.search_input.insert(c);
        self.filter_protocols();
    }

    pub fn search_input_backspace(&mut self) {
        self.search_input.backspace();
        self.filter_protocols();
    }

    pub fn search_input_clear(&mut self) {
        self.search_input.clear();
        self.filter_protocols();
    }

    pub fn search_move_cursor(&mut self, left: bool) {
        if left {
            self.search_input.move_left();
        } else {
            self.search_input.move_right();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_app;

    #[test]
    fn fuzzy_search_narrows_and_resets_selection() {
        let (mut app, _) = test_app();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_protocol_index, 2);

        for c in "endu".chars() {
            app.search_input_char(c);
        }
        assert_eq!(app.selected_protocol_index, 0);
        assert_eq!(app.filtered_protocols.len(), 1);
        assert_eq!(app.filtered_protocols[0].1.id(), "endurance");

        app.search_input_clear();
        assert_eq!(app.filtered_protocols.len(), 4);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let (mut app, _) = test_app();
        app.select_previous();
        assert_eq!(app.selected_protocol_index, 0);
        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.selected_protocol_index, 3);

        for c in "zzzz".chars() {
            app.search_input_char(c);
        }
        app.select_next();
        assert!(app.selected_protocol().is_none());
    }
}
