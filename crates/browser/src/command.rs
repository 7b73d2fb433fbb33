//! Line commands for the terminal driver.

use catalog_core::{DomainError, DomainResult};
use catalog_filters::{FilterAction, PriceBound, SortMode};
use catalog_products::Category;

use crate::browser::{CatalogBrowser, Key};

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserCommand {
    ToggleCategory(Category),
    EditPrice(PriceBound, String),
    ApplyPrice,
    /// The activate key pressed while a price input has focus.
    PriceEnter,
    Search(String),
    /// Search-as-you-type: dispatched after the debounce interval.
    Type(String),
    ToggleInStock,
    Sort(SortMode),
    Page(usize),
    Next,
    Previous,
    Reset,
    /// A raw tagged action, e.g. `{"type": "SET_PAGE", "payload": 2}`.
    Dispatch(FilterAction),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  cat <A-E>        toggle a category
  min <n> | max <n> edit the price draft (blank clears)
  apply | enter    commit the price draft
  search [text]    filter by name now
  type [text]      filter by name after a pause
  stock            toggle in-stock only
  sort none|asc|desc
  page <n> | next | prev
  action <json>    dispatch a raw action
  reset | show | help | quit";

/// Parse one input line.
pub fn parse_command(line: &str) -> DomainResult<BrowserCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" | "show" => BrowserCommand::Show,
        "cat" | "category" => BrowserCommand::ToggleCategory(rest.parse()?),
        "min" => BrowserCommand::EditPrice(PriceBound::Min, rest.to_string()),
        "max" => BrowserCommand::EditPrice(PriceBound::Max, rest.to_string()),
        "apply" => BrowserCommand::ApplyPrice,
        "enter" => BrowserCommand::PriceEnter,
        "search" => BrowserCommand::Search(rest.to_string()),
        "type" => BrowserCommand::Type(rest.to_string()),
        "stock" => BrowserCommand::ToggleInStock,
        "sort" => BrowserCommand::Sort(rest.parse()?),
        "page" => BrowserCommand::Page(
            rest.parse()
                .map_err(|_| DomainError::validation(format!("not a page number: {rest:?}")))?,
        ),
        "next" | ">" => BrowserCommand::Next,
        "prev" | "<" => BrowserCommand::Previous,
        "reset" => BrowserCommand::Reset,
        "action" => BrowserCommand::Dispatch(
            serde_json::from_str(rest)
                .map_err(|e| DomainError::validation(format!("malformed action: {e}")))?,
        ),
        "help" | "?" => BrowserCommand::Help,
        "quit" | "exit" => BrowserCommand::Quit,
        other => return Err(DomainError::unknown_variant("command", other)),
    };

    Ok(command)
}

impl BrowserCommand {
    /// Apply a synchronous command to `browser`.
    ///
    /// `Type`, `Show`, `Help` and `Quit` are the driver's business and leave
    /// the browser untouched.
    pub fn apply(self, browser: &mut CatalogBrowser) {
        match self {
            BrowserCommand::ToggleCategory(category) => browser.toggle_category(category),
            BrowserCommand::EditPrice(bound, raw) => browser.edit_price(bound, &raw),
            BrowserCommand::ApplyPrice => browser.apply_price_draft(),
            BrowserCommand::PriceEnter => {
                browser.handle_price_key(Key::Enter);
            }
            BrowserCommand::Search(text) => browser.set_search(text),
            BrowserCommand::ToggleInStock => browser.toggle_in_stock(),
            BrowserCommand::Sort(sort) => browser.set_sort(sort),
            BrowserCommand::Page(page) => {
                browser.go_to_page(page);
            }
            BrowserCommand::Next => {
                browser.next_page();
            }
            BrowserCommand::Previous => {
                browser.previous_page();
            }
            BrowserCommand::Reset => browser.reset(),
            BrowserCommand::Dispatch(action) => browser.dispatch(action),
            BrowserCommand::Type(_)
            | BrowserCommand::Show
            | BrowserCommand::Help
            | BrowserCommand::Quit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_command("cat b").unwrap(),
            BrowserCommand::ToggleCategory(Category::B)
        );
        assert_eq!(
            parse_command("  min  12a ").unwrap(),
            BrowserCommand::EditPrice(PriceBound::Min, "12a".to_string())
        );
        assert_eq!(
            parse_command("sort desc").unwrap(),
            BrowserCommand::Sort(SortMode::PriceDesc)
        );
        assert_eq!(parse_command("page 4").unwrap(), BrowserCommand::Page(4));
        assert_eq!(
            parse_command("search Widget Pro").unwrap(),
            BrowserCommand::Search("Widget Pro".to_string())
        );
    }

    #[test]
    fn bare_search_clears_the_search() {
        assert_eq!(
            parse_command("search").unwrap(),
            BrowserCommand::Search(String::new())
        );
    }

    #[test]
    fn empty_line_shows_the_page() {
        assert_eq!(parse_command("   ").unwrap(), BrowserCommand::Show);
    }

    #[test]
    fn raw_actions_are_parsed_as_tagged_json() {
        assert_eq!(
            parse_command(r#"action {"type": "SET_PAGE", "payload": 2}"#).unwrap(),
            BrowserCommand::Dispatch(FilterAction::SetPage(2))
        );
        assert_eq!(
            parse_command(r#"action {"type": "SHOW_CONFETTI"}"#).unwrap(),
            BrowserCommand::Dispatch(FilterAction::Unrecognized)
        );
    }

    #[test]
    fn rejects_unknown_commands_and_bad_arguments() {
        assert!(matches!(
            parse_command("launch"),
            Err(DomainError::UnknownVariant { kind: "command", .. })
        ));
        assert!(matches!(
            parse_command("cat Q"),
            Err(DomainError::UnknownVariant { kind: "category", .. })
        ));
        assert!(matches!(parse_command("page two"), Err(DomainError::Validation(_))));
        assert!(matches!(parse_command("action {"), Err(DomainError::Validation(_))));
    }
}
