//! Selector parsing and matching for [`query_selector`](crate::document::query_selector).
//!
//! Supported syntax is a comma separated list of complex selectors. Each
//! complex selector is a chain of compound selectors (`div`, `*`, `#id`,
//! `.class`, or a run of them like `div.card#main`) joined by whitespace
//! (descendant) or `>` (child). Anything else is rejected with a
//! [`SelectorError`].

use std::{iter::Peekable, str::CharIndices};

use smallvec::SmallVec;
use thiserror::Error;

use crate::id::ElementId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,
    #[error("unexpected `{found}` at offset {offset}")]
    Unexpected { found: char, offset: usize },
    #[error("expected a name after `{prefix}` at offset {offset}")]
    MissingName { prefix: char, offset: usize },
    #[error("selector ends with a combinator")]
    DanglingCombinator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Universal,
    /// Tag names are stored lowercase.
    Type(String),
    Class(String),
    Id(String),
}

impl SimpleSelector {
    fn matches(&self, element: ElementId) -> bool {
        match self {
            SimpleSelector::Universal => element.is_element(),
            SimpleSelector::Type(tag) => element.tag().as_deref() == Some(tag.as_str()),
            SimpleSelector::Class(class) => element.has_class(class),
            SimpleSelector::Id(id) => element.id_attr().as_deref() == Some(id.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    pub simples: SmallVec<[SimpleSelector; 2]>,
}

impl CompoundSelector {
    fn matches(&self, element: ElementId) -> bool {
        element.is_element() && self.simples.iter().all(|s| s.matches(element))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
}

/// Compounds joined by combinators, left to right.
/// `combinators[i]` sits between `compounds[i]` and `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    pub compounds: Vec<CompoundSelector>,
    pub combinators: Vec<Combinator>,
}

impl ComplexSelector {
    pub fn matches(&self, element: ElementId) -> bool {
        match self.compounds.len() {
            0 => false,
            len => self.matches_at(element, len - 1),
        }
    }

    // Right-to-left, backtracking over ancestors for descendant combinators.
    fn matches_at(&self, element: ElementId, index: usize) -> bool {
        if !self.compounds[index].matches(element) {
            return false;
        }
        if index == 0 {
            return true;
        }
        match self.combinators[index - 1] {
            Combinator::Child => element
                .parent()
                .is_some_and(|parent| self.matches_at(parent, index - 1)),
            Combinator::Descendant => {
                let mut ancestor = element.parent();
                while let Some(id) = ancestor {
                    if self.matches_at(id, index - 1) {
                        return true;
                    }
                    ancestor = id.parent();
                }
                false
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    pub selectors: SmallVec<[ComplexSelector; 1]>,
}

impl SelectorList {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        Parser::new(input).parse_list()
    }

    pub fn matches(&self, element: ElementId) -> bool {
        self.selectors.iter().any(|s| s.matches(element))
    }
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    fn skip_whitespace(&mut self) -> bool {
        let mut skipped = false;
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {
            skipped = true;
        }
        skipped
    }

    fn name(&mut self) -> String {
        let mut name = String::new();
        while let Some((_, c)) = self.chars.next_if(|(_, c)| is_name_char(*c)) {
            name.push(c);
        }
        name
    }

    fn parse_list(&mut self) -> Result<SelectorList, SelectorError> {
        let mut selectors = SmallVec::new();
        loop {
            selectors.push(self.parse_complex()?);
            match self.chars.next() {
                None => break,
                Some((_, ',')) => continue,
                Some((offset, found)) => return Err(SelectorError::Unexpected { found, offset }),
            }
        }
        Ok(SelectorList { selectors })
    }

    /// Stops before a `,` or at the end of input.
    fn parse_complex(&mut self) -> Result<ComplexSelector, SelectorError> {
        self.skip_whitespace();
        let mut compounds = vec![self.parse_compound()?];
        let mut combinators = Vec::new();
        loop {
            let had_space = self.skip_whitespace();
            let combinator = match self.chars.peek() {
                None | Some((_, ',')) => break,
                Some((_, '>')) => {
                    self.chars.next();
                    self.skip_whitespace();
                    Combinator::Child
                }
                Some(_) if had_space => Combinator::Descendant,
                Some(&(offset, found)) => return Err(SelectorError::Unexpected { found, offset }),
            };
            if matches!(self.chars.peek(), None | Some((_, ','))) {
                return Err(SelectorError::DanglingCombinator);
            }
            combinators.push(combinator);
            compounds.push(self.parse_compound()?);
        }
        Ok(ComplexSelector {
            compounds,
            combinators,
        })
    }

    fn parse_compound(&mut self) -> Result<CompoundSelector, SelectorError> {
        let mut simples = SmallVec::new();
        match self.chars.peek() {
            None => return Err(SelectorError::Empty),
            Some((_, '*')) => {
                self.chars.next();
                simples.push(SimpleSelector::Universal);
            }
            Some(&(_, c)) if is_name_char(c) => {
                simples.push(SimpleSelector::Type(self.name().to_lowercase()));
            }
            _ => {}
        }
        while let Some(&(offset, prefix)) = self.chars.peek() {
            if prefix != '.' && prefix != '#' {
                break;
            }
            self.chars.next();
            let name = self.name();
            if name.is_empty() {
                return Err(SelectorError::MissingName { prefix, offset });
            }
            simples.push(if prefix == '.' {
                SimpleSelector::Class(name)
            } else {
                SimpleSelector::Id(name)
            });
        }
        if simples.is_empty() {
            return Err(match self.chars.peek() {
                None | Some((_, ',')) => SelectorError::Empty,
                Some(&(offset, found)) => SelectorError::Unexpected { found, offset },
            });
        }
        Ok(CompoundSelector { simples })
    }
}
