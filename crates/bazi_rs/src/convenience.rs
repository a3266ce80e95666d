use bazi_chart::{BaZiChart, Sex};
use bazi_cycle::{Branch, Pillar, Stem, TenGod, index_of, ten_god};
use bazi_time::BirthTime;

use crate::error::BaziError;

/// Parse a stem from its pinyin or Han name.
pub fn parse_stem(text: &str) -> Result<Stem, BaziError> {
    Stem::from_name(text).ok_or_else(|| BaziError::UnknownName {
        kind: "stem",
        text: text.to_string(),
    })
}

/// Parse a branch from its pinyin, Han, or animal name.
pub fn parse_branch(text: &str) -> Result<Branch, BaziError> {
    Branch::from_name(text).ok_or_else(|| BaziError::UnknownName {
        kind: "branch",
        text: text.to_string(),
    })
}

pub fn parse_sex(text: &str) -> Result<Sex, BaziError> {
    Sex::from_name(text).ok_or_else(|| BaziError::UnknownName {
        kind: "sex",
        text: text.to_string(),
    })
}

/// Parse a pillar written as two Han characters (`庚辰`) or as
/// `Stem-Branch` in pinyin (`Geng-Chen`). The pair must be on the 60-cycle.
pub fn parse_pillar(text: &str) -> Result<Pillar, BaziError> {
    let text = text.trim();
    let (stem, branch) = match text.split_once(['-', ' ']) {
        Some((s, b)) => (s, b),
        None => {
            let mut chars = text.char_indices();
            match (chars.next(), chars.next()) {
                (Some(_), Some((i, _))) => text.split_at(i),
                _ => {
                    return Err(BaziError::UnknownName {
                        kind: "pillar",
                        text: text.to_string(),
                    });
                }
            }
        }
    };
    let stem = parse_stem(stem)?;
    let branch = parse_branch(branch)?;
    Ok(index_of(stem, branch)?.pillar())
}

/// Chart for a birth time written as `YYYY-MM-DDThh[:mm]`.
pub fn chart_for(birth: &str) -> Result<BaZiChart, BaziError> {
    let birth: BirthTime = birth.parse()?;
    Ok(BaZiChart::from_birth(&birth))
}

/// Ten-God of `other` seen from `day_stem`, both given by name.
pub fn ten_god_by_name(day_stem: &str, other: &str) -> Result<TenGod, BaziError> {
    Ok(ten_god(parse_stem(day_stem)?, parse_stem(other)?))
}
