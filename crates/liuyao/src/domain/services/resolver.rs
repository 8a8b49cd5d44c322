//! Resolver - Binary to fully annotated hexagram
//!
//! Lookups that miss the static tables do not fail: the name becomes a
//! placeholder and lines lose their kinship and label, but the figure still
//! renders.

use super::encoder::decode_trigram;
use super::tables::{hexagram_name, line_table, spirit_offset, LineTable};
use crate::domain::entities::{Hexagram, HexagramName, LineDetail};
use crate::domain::value_objects::{
    GuardianSpirit, HexagramBinary, Kinship, LineKind, LineRole, Stem, Trigram, LINE_COUNT,
};

/// Guardian spirits for positions 1..=6, phased by the day stem
pub fn guardian_spirits(day_stem: Option<Stem>) -> [GuardianSpirit; LINE_COUNT] {
    let offset = spirit_offset(day_stem);
    std::array::from_fn(|i| GuardianSpirit::at(offset + i))
}

/// Split a raw table label such as `父母戌土 世` into kinship, element label
/// and role
pub fn parse_line_label(raw: &str) -> (Option<Kinship>, String, LineRole) {
    let (text, role) = LineRole::split_suffix(raw);
    match Kinship::strip_prefix(text) {
        Some((kinship, rest)) => (Some(kinship), rest.to_string(), role),
        None => (None, text.to_string(), role),
    }
}

/// Resolve a binary into its name, trigrams, house and line annotations
pub fn resolve(binary: &HexagramBinary, day_stem: Option<Stem>) -> Hexagram {
    resolve_with(binary, day_stem, hexagram_name, line_table)
}

/// Resolve against the given name and line-table lookups
pub(crate) fn resolve_with<N, T>(
    binary: &HexagramBinary,
    day_stem: Option<Stem>,
    names: N,
    tables: T,
) -> Hexagram
where
    N: Fn(&str) -> Option<&'static str>,
    T: Fn(&str) -> Option<&'static LineTable>,
{
    let upper = decode_trigram(binary.upper()).ok();
    let lower = decode_trigram(binary.lower()).ok();

    let key = format!(
        "{}{}",
        upper.map_or("未知", Trigram::name),
        lower.map_or("未知", Trigram::name)
    );

    let name = match names(&key) {
        Some(name) => HexagramName::Canonical(name.to_string()),
        None => {
            tracing::warn!("⚠️ No canonical name for trigram pair {}", key);
            HexagramName::Placeholder(key)
        }
    };

    let table = name.base_name().and_then(&tables);
    if table.is_none() && name.is_resolved() {
        tracing::warn!("⚠️ No line table for {}", name);
    }

    let spirits = guardian_spirits(day_stem);
    let lines = (1..=LINE_COUNT as u8)
        .map(|position| {
            let index = usize::from(position) - 1;
            let binary_char = char::from(binary.as_str().as_bytes()[LINE_COUNT - index - 1]);
            let (kinship, label, role) = match table {
                Some(table) => {
                    let (kinship, label, role) = parse_line_label(table.lines[index]);
                    (kinship, Some(label), role)
                }
                None => (None, None, LineRole::None),
            };
            LineDetail {
                position,
                binary: binary_char,
                line_type: if binary_char == '0' {
                    LineKind::Solid
                } else {
                    LineKind::Broken
                },
                kinship,
                label,
                spirit: spirits[index],
                role,
            }
        })
        .collect();

    Hexagram {
        binary: binary.clone(),
        name,
        upper,
        lower,
        house: table.map(|t| t.house),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(bits: &str) -> HexagramBinary {
        HexagramBinary::parse(bits).unwrap()
    }

    #[test]
    fn test_resolve_qian() {
        let hexagram = resolve(&bin("000000"), Some(Stem::Jia));
        assert_eq!(hexagram.name, HexagramName::Canonical("乾为天".to_string()));
        assert_eq!(hexagram.upper, Some(Trigram::Qian));
        assert_eq!(hexagram.lower, Some(Trigram::Qian));
        assert_eq!(hexagram.house_label(), "乾宫");
        assert_eq!(hexagram.lines.len(), 6);

        let top = hexagram.line(6).unwrap();
        assert_eq!(top.kinship, Some(Kinship::Parents));
        assert_eq!(top.label.as_deref(), Some("戌土"));
        assert_eq!(top.role, LineRole::Ruler);
        assert_eq!(top.line_type, LineKind::Solid);
        assert_eq!(hexagram.responder().unwrap().position, 3);
    }

    #[test]
    fn test_resolve_meng() {
        let hexagram = resolve(&bin("011101"), Some(Stem::Jia));
        assert_eq!(hexagram.name.to_string(), "山水蒙");
        assert_eq!(hexagram.upper, Some(Trigram::Gen));
        assert_eq!(hexagram.lower, Some(Trigram::Kan));
        assert_eq!(hexagram.house, Some(Trigram::Li));
        assert_eq!(hexagram.ruler().unwrap().position, 4);

        let bottom = hexagram.line(1).unwrap();
        assert_eq!(bottom.binary, '1');
        assert_eq!(bottom.line_type, LineKind::Broken);
        assert_eq!(bottom.spirit, GuardianSpirit::AzureDragon);
        assert_eq!(bottom.label.as_deref(), Some("寅木"));
        assert_eq!(bottom.role, LineRole::Responder);
    }

    #[test]
    fn test_every_binary_resolves() {
        for value in 0..64u32 {
            let hexagram = resolve(&bin(&format!("{:06b}", value)), None);
            assert!(hexagram.name.is_resolved());
            assert!(hexagram.house.is_some());
            assert!(hexagram.ruler().is_some());
            assert!(hexagram.responder().is_some());
        }
    }

    #[test]
    fn test_parse_line_label() {
        assert_eq!(
            parse_line_label("父母戌土 世"),
            (Some(Kinship::Parents), "戌土".to_string(), LineRole::Ruler)
        );
        assert_eq!(
            parse_line_label("官鬼卯木 应"),
            (Some(Kinship::Officials), "卯木".to_string(), LineRole::Responder)
        );
        assert_eq!(
            parse_line_label("伏神巳火"),
            (None, "伏神巳火".to_string(), LineRole::None)
        );
    }

    #[test]
    fn test_spirits_are_rotation() {
        for stem in Stem::ALL.into_iter().map(Some).chain([None]) {
            let spirits = guardian_spirits(stem);
            let start = GuardianSpirit::CYCLE
                .iter()
                .position(|s| *s == spirits[0])
                .unwrap();
            for (i, spirit) in spirits.iter().enumerate() {
                assert_eq!(*spirit, GuardianSpirit::CYCLE[(start + i) % 6]);
            }
        }
        assert_eq!(guardian_spirits(Some(Stem::Ren))[0], GuardianSpirit::BlackTortoise);
        assert_eq!(guardian_spirits(Some(Stem::Ren))[1], GuardianSpirit::AzureDragon);
        assert_eq!(guardian_spirits(None)[0], GuardianSpirit::AzureDragon);
    }

    #[test]
    fn test_unknown_name_degrades_to_placeholder() {
        let hexagram = resolve_with(&bin("000111"), Some(Stem::Jia), |_| None, line_table);
        assert_eq!(hexagram.name, HexagramName::Placeholder("乾坤".to_string()));
        assert!(!hexagram.name.is_resolved());
        assert_eq!(hexagram.upper, Some(Trigram::Qian));
        assert_eq!(hexagram.lower, Some(Trigram::Kun));
        assert_eq!(hexagram.house, None);
        assert_eq!(hexagram.lines.len(), 6);
        assert!(hexagram.ruler().is_none());
        for (line, spirit) in hexagram.lines.iter().zip(guardian_spirits(Some(Stem::Jia))) {
            assert_eq!(line.kinship, None);
            assert_eq!(line.label, None);
            assert_eq!(line.role, LineRole::None);
            assert_eq!(line.spirit, spirit);
        }
        assert_eq!(hexagram.line(1).unwrap().line_type, LineKind::Broken);
        assert_eq!(hexagram.line(6).unwrap().line_type, LineKind::Solid);
    }

    #[test]
    fn test_name_without_line_table() {
        let hexagram = resolve_with(&bin("000000"), None, |_| Some("无表卦"), line_table);
        assert_eq!(hexagram.name, HexagramName::Canonical("无表卦".to_string()));
        assert_eq!(hexagram.house, None);
        assert_eq!(hexagram.lines.len(), 6);
        assert!(hexagram.lines.iter().all(|line| line.label.is_none()));
        assert!(hexagram.responder().is_none());
        assert_eq!(hexagram.line(1).unwrap().spirit, GuardianSpirit::AzureDragon);
    }

    #[test]
    fn test_resolve_with_injected_table() {
        static TABLE: LineTable = LineTable {
            name: "乾为天",
            house: Trigram::Kun,
            lines: ["子孙子水 世", "", "", "官鬼卯木 应", "", ""],
        };
        let hexagram = resolve_with(&bin("000000"), None, hexagram_name, |_| Some(&TABLE));
        assert_eq!(hexagram.house, Some(Trigram::Kun));
        assert_eq!(hexagram.ruler().unwrap().position, 1);
        assert_eq!(hexagram.responder().unwrap().position, 4);
        assert_eq!(hexagram.line(1).unwrap().kinship, Some(Kinship::Offspring));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let binary = bin("101100");
        assert_eq!(
            resolve(&binary, Some(Stem::Wu)),
            resolve(&binary, Some(Stem::Wu))
        );
    }
}
