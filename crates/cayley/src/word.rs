//! Generator words: parsing by name, evaluation, geodesics and selection of
//! named generator subsets.
//!
//! A word is whitespace-separated generator names; `e` (or nothing) is the
//! identity. A token that is not a name but splits into single-character
//! names (`ttA`) is read letter by letter.

use crate::algebra::{Algebra, Generator};
use crate::ball::build_ball;
use crate::config::BallCfg;
use crate::error::{ConfigError, SpecError};

/// Generator indices for `text` over `labels`.
pub fn parse_word<S: AsRef<str>>(labels: &[S], text: &str) -> Result<Vec<usize>, SpecError> {
    let find = |name: &str| labels.iter().position(|l| l.as_ref() == name);
    let mut word = Vec::new();
    for tok in text.split_whitespace() {
        if tok == "e" {
            continue;
        }
        if let Some(i) = find(tok) {
            word.push(i);
            continue;
        }
        let letters: Option<Vec<usize>> = tok
            .chars()
            .map(|c| find(c.encode_utf8(&mut [0; 4])))
            .collect();
        match letters {
            Some(mut letters) => word.append(&mut letters),
            None => {
                return Err(SpecError::UnknownGenerator {
                    name: tok.to_string(),
                })
            }
        }
    }
    Ok(word)
}

/// State reached from the identity by `word`.
pub fn evaluate<A: Algebra>(
    algebra: &A,
    generators: &[Generator<A::Step>],
    word: &[usize],
) -> A::State {
    algebra.apply_word(
        &algebra.identity(),
        word.iter().map(|&i| &generators[i].step),
    )
}

/// Distance and canonical shortest word of a state found inside a ball.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Geodesic {
    pub distance: usize,
    pub word: Vec<usize>,
    pub names: Vec<String>,
}

/// Build `B_max_radius` and look `state` up; `None` if it lies outside.
pub fn geodesic<A: Algebra>(
    algebra: &A,
    generators: &[Generator<A::Step>],
    state: &A::State,
    max_radius: usize,
) -> Result<Option<Geodesic>, ConfigError> {
    let ball = build_ball(algebra, generators, BallCfg::new(max_radius))?;
    Ok(ball.id_of(state).map(|v| Geodesic {
        distance: ball.dist(v),
        word: ball.word(v),
        names: ball.word_names(v).into_iter().map(str::to_string).collect(),
    }))
}

/// Pick default generators by name, in the requested order. An empty list
/// selects all of them.
pub fn select_generators<A: Algebra, S: AsRef<str>>(
    algebra: &A,
    names: &[S],
) -> Result<Vec<Generator<A::Step>>, ConfigError> {
    let all = algebra.default_generators();
    if names.is_empty() {
        return Ok(all);
    }
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            all.iter().find(|g| g.name == name).cloned().ok_or_else(|| {
                ConfigError::from(SpecError::UnknownGenerator {
                    name: name.to_string(),
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{Cyclic, IntegerLine};
    use crate::wreath::Wreath;

    fn lamplighter() -> Wreath<Cyclic, IntegerLine> {
        Wreath::new(Cyclic::new(2).unwrap(), IntegerLine)
    }

    #[test]
    fn parses_spaced_and_packed_words() {
        let labels = ["t", "T", "a", "a2"];
        assert_eq!(parse_word(&labels, "t t a").unwrap(), vec![0, 0, 2]);
        assert_eq!(parse_word(&labels, "ttTa").unwrap(), vec![0, 0, 1, 2]);
        assert_eq!(parse_word(&labels, "a2 e").unwrap(), vec![3]);
        assert!(parse_word(&labels, "").unwrap().is_empty());
        assert_eq!(
            parse_word(&labels, "t q"),
            Err(SpecError::UnknownGenerator {
                name: "q".to_string()
            })
        );
    }

    #[test]
    fn evaluate_and_geodesic_agree() {
        let w = lamplighter();
        let gens = w.default_generators();
        let labels: Vec<&str> = gens.iter().map(|g| g.name.as_str()).collect();
        // a t a T T: lamps at 0 and 1, head at -1.
        let word = parse_word(&labels, "a t a T T").unwrap();
        let state = evaluate(&w, &gens, &word);
        assert_eq!(state, w.state(-1, [(0, 1), (1, 1)]));
        let geo = geodesic(&w, &gens, &state, 6).unwrap().unwrap();
        assert_eq!(geo.distance, 5);
        assert_eq!(evaluate(&w, &gens, &geo.word), state);
        assert_eq!(geo.names.len(), 5);
        assert_eq!(geodesic(&w, &gens, &state, 4).unwrap(), None);
    }

    #[test]
    fn selects_generators_by_name() {
        let w = lamplighter();
        let picked = select_generators(&w, &["a", "t"]).unwrap();
        let names: Vec<&str> = picked.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["a", "t"]);
        let none: [&str; 0] = [];
        assert_eq!(select_generators(&w, &none).unwrap().len(), 3);
        assert!(matches!(
            select_generators(&w, &["x"]),
            Err(ConfigError::Spec(SpecError::UnknownGenerator { .. }))
        ));
    }
}
