//! Static domain tables
//!
//! Read-only data shared by every divination: the 64 canonical names, the
//! per-hexagram house and line labels (纳甲 with kinship and 世/应 markers),
//! and the day-stem phase of the guardian-spirit cycle. Lookup maps are
//! built once on first use.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::domain::value_objects::{Stem, Trigram};

/// House and raw line labels of one hexagram
#[derive(Debug)]
pub(crate) struct LineTable {
    pub name: &'static str,
    pub house: Trigram,
    /// Bottom line first
    pub lines: [&'static str; 6],
}

/// Guardian-spirit starting offset per day stem, in stem order 甲..癸
static SPIRIT_OFFSETS: [usize; 10] = [0, 0, 1, 1, 2, 3, 4, 4, 5, 5];

static NAME_INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static LINE_INDEX: OnceLock<HashMap<&'static str, &'static LineTable>> = OnceLock::new();

/// Canonical name for an upper + lower trigram name key (e.g. `乾坤`)
pub(crate) fn hexagram_name(key: &str) -> Option<&'static str> {
    NAME_INDEX
        .get_or_init(|| HEXAGRAM_NAMES.iter().copied().collect())
        .get(key)
        .copied()
}

/// Line table for a canonical hexagram name
pub(crate) fn line_table(name: &str) -> Option<&'static LineTable> {
    LINE_INDEX
        .get_or_init(|| LINE_TABLES.iter().map(|table| (table.name, table)).collect())
        .get(name)
        .copied()
}

/// Starting position in the guardian-spirit cycle; 0 without a day stem
pub(crate) fn spirit_offset(day_stem: Option<Stem>) -> usize {
    day_stem.map_or(0, |stem| SPIRIT_OFFSETS[stem.index()])
}

/// Canonical hexagram names keyed by upper + lower trigram name
pub(crate) static HEXAGRAM_NAMES: [(&str, &str); 64] = [
    ("乾乾", "乾为天"),
    ("乾兑", "天泽履"),
    ("乾离", "天火同人"),
    ("乾震", "天雷无妄"),
    ("乾巽", "天风姤"),
    ("乾坎", "天水讼"),
    ("乾艮", "天山遁"),
    ("乾坤", "天地否"),
    ("兑乾", "泽天夬"),
    ("兑兑", "兑为泽"),
    ("兑离", "泽火革"),
    ("兑震", "泽雷随"),
    ("兑巽", "泽风大过"),
    ("兑坎", "泽水困"),
    ("兑艮", "泽山咸"),
    ("兑坤", "泽地萃"),
    ("离乾", "火天大有"),
    ("离兑", "火泽睽"),
    ("离离", "离为火"),
    ("离震", "火雷噬嗑"),
    ("离巽", "火风鼎"),
    ("离坎", "火水未济"),
    ("离艮", "火山旅"),
    ("离坤", "火地晋"),
    ("震乾", "雷天大壮"),
    ("震兑", "雷泽归妹"),
    ("震离", "雷火丰"),
    ("震震", "震为雷"),
    ("震巽", "雷风恒"),
    ("震坎", "雷水解"),
    ("震艮", "雷山小过"),
    ("震坤", "雷地豫"),
    ("巽乾", "风天小畜"),
    ("巽兑", "风泽中孚"),
    ("巽离", "风火家人"),
    ("巽震", "风雷益"),
    ("巽巽", "巽为风"),
    ("巽坎", "风水涣"),
    ("巽艮", "风山渐"),
    ("巽坤", "风地观"),
    ("坎乾", "水天需"),
    ("坎兑", "水泽节"),
    ("坎离", "水火既济"),
    ("坎震", "水雷屯"),
    ("坎巽", "水风井"),
    ("坎坎", "坎为水"),
    ("坎艮", "水山蹇"),
    ("坎坤", "水地比"),
    ("艮乾", "山天大畜"),
    ("艮兑", "山泽损"),
    ("艮离", "山火贲"),
    ("艮震", "山雷颐"),
    ("艮巽", "山风蛊"),
    ("艮坎", "山水蒙"),
    ("艮艮", "艮为山"),
    ("艮坤", "山地剥"),
    ("坤乾", "地天泰"),
    ("坤兑", "地泽临"),
    ("坤离", "地火明夷"),
    ("坤震", "地雷复"),
    ("坤巽", "地风升"),
    ("坤坎", "地水师"),
    ("坤艮", "地山谦"),
    ("坤坤", "坤为地"),
];

/// House and line labels (bottom line first) keyed by hexagram name,
/// grouped by house in generation order
pub(crate) static LINE_TABLES: [LineTable; 64] = [
    LineTable {
        name: "乾为天",
        house: Trigram::Qian,
        lines: ["子孙子水", "妻财寅木", "父母辰土 应", "官鬼午火", "兄弟申金", "父母戌土 世"],
    },
    LineTable {
        name: "天风姤",
        house: Trigram::Qian,
        lines: ["父母丑土 世", "子孙亥水", "兄弟酉金", "官鬼午火 应", "兄弟申金", "父母戌土"],
    },
    LineTable {
        name: "天山遁",
        house: Trigram::Qian,
        lines: ["父母辰土", "官鬼午火 世", "兄弟申金", "官鬼午火", "兄弟申金 应", "父母戌土"],
    },
    LineTable {
        name: "天地否",
        house: Trigram::Qian,
        lines: ["父母未土", "官鬼巳火", "妻财卯木 世", "官鬼午火", "兄弟申金", "父母戌土 应"],
    },
    LineTable {
        name: "风地观",
        house: Trigram::Qian,
        lines: ["父母未土 应", "官鬼巳火", "妻财卯木", "父母未土 世", "官鬼巳火", "妻财卯木"],
    },
    LineTable {
        name: "山地剥",
        house: Trigram::Qian,
        lines: ["父母未土", "官鬼巳火 应", "妻财卯木", "父母戌土", "子孙子水 世", "妻财寅木"],
    },
    LineTable {
        name: "火地晋",
        house: Trigram::Qian,
        lines: ["父母未土 应", "官鬼巳火", "妻财卯木", "兄弟酉金 世", "父母未土", "官鬼巳火"],
    },
    LineTable {
        name: "火天大有",
        house: Trigram::Qian,
        lines: ["子孙子水", "妻财寅木", "父母辰土 世", "兄弟酉金", "父母未土", "官鬼巳火 应"],
    },
    LineTable {
        name: "兑为泽",
        house: Trigram::Dui,
        lines: ["官鬼巳火", "妻财卯木", "父母丑土 应", "子孙亥水", "兄弟酉金", "父母未土 世"],
    },
    LineTable {
        name: "泽水困",
        house: Trigram::Dui,
        lines: ["妻财寅木 世", "父母辰土", "官鬼午火", "子孙亥水 应", "兄弟酉金", "父母未土"],
    },
    LineTable {
        name: "泽地萃",
        house: Trigram::Dui,
        lines: ["父母未土", "官鬼巳火 世", "妻财卯木", "子孙亥水", "兄弟酉金 应", "父母未土"],
    },
    LineTable {
        name: "泽山咸",
        house: Trigram::Dui,
        lines: ["父母辰土", "官鬼午火", "兄弟申金 世", "子孙亥水", "兄弟酉金", "父母未土 应"],
    },
    LineTable {
        name: "水山蹇",
        house: Trigram::Dui,
        lines: ["父母辰土 应", "官鬼午火", "兄弟申金", "兄弟申金 世", "父母戌土", "子孙子水"],
    },
    LineTable {
        name: "地山谦",
        house: Trigram::Dui,
        lines: ["父母辰土", "官鬼午火 应", "兄弟申金", "父母丑土", "子孙亥水 世", "兄弟酉金"],
    },
    LineTable {
        name: "雷山小过",
        house: Trigram::Dui,
        lines: ["父母辰土 应", "官鬼午火", "兄弟申金", "官鬼午火 世", "兄弟申金", "父母戌土"],
    },
    LineTable {
        name: "雷泽归妹",
        house: Trigram::Dui,
        lines: ["官鬼巳火", "妻财卯木", "父母丑土 世", "官鬼午火", "兄弟申金", "父母戌土 应"],
    },
    LineTable {
        name: "离为火",
        house: Trigram::Li,
        lines: ["父母卯木", "子孙丑土", "官鬼亥水 应", "妻财酉金", "子孙未土", "兄弟巳火 世"],
    },
    LineTable {
        name: "火山旅",
        house: Trigram::Li,
        lines: ["子孙辰土 世", "兄弟午火", "妻财申金", "妻财酉金 应", "子孙未土", "兄弟巳火"],
    },
    LineTable {
        name: "火风鼎",
        house: Trigram::Li,
        lines: ["子孙丑土", "官鬼亥水 世", "妻财酉金", "妻财酉金", "子孙未土 应", "兄弟巳火"],
    },
    LineTable {
        name: "火水未济",
        house: Trigram::Li,
        lines: ["父母寅木", "子孙辰土", "兄弟午火 世", "妻财酉金", "子孙未土", "兄弟巳火 应"],
    },
    LineTable {
        name: "山水蒙",
        house: Trigram::Li,
        lines: ["父母寅木 应", "子孙辰土", "兄弟午火", "子孙戌土 世", "官鬼子水", "父母寅木"],
    },
    LineTable {
        name: "风水涣",
        house: Trigram::Li,
        lines: ["父母寅木", "子孙辰土 应", "兄弟午火", "子孙未土", "兄弟巳火 世", "父母卯木"],
    },
    LineTable {
        name: "天水讼",
        house: Trigram::Li,
        lines: ["父母寅木 应", "子孙辰土", "兄弟午火", "兄弟午火 世", "妻财申金", "子孙戌土"],
    },
    LineTable {
        name: "天火同人",
        house: Trigram::Li,
        lines: ["父母卯木", "子孙丑土", "官鬼亥水 世", "兄弟午火", "妻财申金", "子孙戌土 应"],
    },
    LineTable {
        name: "震为雷",
        house: Trigram::Zhen,
        lines: ["父母子水", "兄弟寅木", "妻财辰土 应", "子孙午火", "官鬼申金", "妻财戌土 世"],
    },
    LineTable {
        name: "雷地豫",
        house: Trigram::Zhen,
        lines: ["妻财未土 世", "子孙巳火", "兄弟卯木", "子孙午火 应", "官鬼申金", "妻财戌土"],
    },
    LineTable {
        name: "雷水解",
        house: Trigram::Zhen,
        lines: ["兄弟寅木", "妻财辰土 世", "子孙午火", "子孙午火", "官鬼申金 应", "妻财戌土"],
    },
    LineTable {
        name: "雷风恒",
        house: Trigram::Zhen,
        lines: ["妻财丑土", "父母亥水", "官鬼酉金 世", "子孙午火", "官鬼申金", "妻财戌土 应"],
    },
    LineTable {
        name: "地风升",
        house: Trigram::Zhen,
        lines: ["妻财丑土 应", "父母亥水", "官鬼酉金", "妻财丑土 世", "父母亥水", "官鬼酉金"],
    },
    LineTable {
        name: "水风井",
        house: Trigram::Zhen,
        lines: ["妻财丑土", "父母亥水 应", "官鬼酉金", "官鬼申金", "妻财戌土 世", "父母子水"],
    },
    LineTable {
        name: "泽风大过",
        house: Trigram::Zhen,
        lines: ["妻财丑土 应", "父母亥水", "官鬼酉金", "父母亥水 世", "官鬼酉金", "妻财未土"],
    },
    LineTable {
        name: "泽雷随",
        house: Trigram::Zhen,
        lines: ["父母子水", "兄弟寅木", "妻财辰土 世", "父母亥水", "官鬼酉金", "妻财未土 应"],
    },
    LineTable {
        name: "巽为风",
        house: Trigram::Xun,
        lines: ["妻财丑土", "父母亥水", "官鬼酉金 应", "妻财未土", "子孙巳火", "兄弟卯木 世"],
    },
    LineTable {
        name: "风天小畜",
        house: Trigram::Xun,
        lines: ["父母子水 世", "兄弟寅木", "妻财辰土", "妻财未土 应", "子孙巳火", "兄弟卯木"],
    },
    LineTable {
        name: "风火家人",
        house: Trigram::Xun,
        lines: ["兄弟卯木", "妻财丑土 世", "父母亥水", "妻财未土", "子孙巳火 应", "兄弟卯木"],
    },
    LineTable {
        name: "风雷益",
        house: Trigram::Xun,
        lines: ["父母子水", "兄弟寅木", "妻财辰土 世", "妻财未土", "子孙巳火", "兄弟卯木 应"],
    },
    LineTable {
        name: "天雷无妄",
        house: Trigram::Xun,
        lines: ["父母子水 应", "兄弟寅木", "妻财辰土", "子孙午火 世", "官鬼申金", "妻财戌土"],
    },
    LineTable {
        name: "火雷噬嗑",
        house: Trigram::Xun,
        lines: ["父母子水", "兄弟寅木 应", "妻财辰土", "官鬼酉金", "妻财未土 世", "子孙巳火"],
    },
    LineTable {
        name: "山雷颐",
        house: Trigram::Xun,
        lines: ["父母子水 应", "兄弟寅木", "妻财辰土", "妻财戌土 世", "父母子水", "兄弟寅木"],
    },
    LineTable {
        name: "山风蛊",
        house: Trigram::Xun,
        lines: ["妻财丑土", "父母亥水", "官鬼酉金 世", "妻财戌土", "父母子水", "兄弟寅木 应"],
    },
    LineTable {
        name: "坎为水",
        house: Trigram::Kan,
        lines: ["子孙寅木", "官鬼辰土", "妻财午火 应", "父母申金", "官鬼戌土", "兄弟子水 世"],
    },
    LineTable {
        name: "水泽节",
        house: Trigram::Kan,
        lines: ["妻财巳火 世", "子孙卯木", "官鬼丑土", "父母申金 应", "官鬼戌土", "兄弟子水"],
    },
    LineTable {
        name: "水雷屯",
        house: Trigram::Kan,
        lines: ["兄弟子水", "子孙寅木 世", "官鬼辰土", "父母申金", "官鬼戌土 应", "兄弟子水"],
    },
    LineTable {
        name: "水火既济",
        house: Trigram::Kan,
        lines: ["子孙卯木", "官鬼丑土", "兄弟亥水 世", "父母申金", "官鬼戌土", "兄弟子水 应"],
    },
    LineTable {
        name: "泽火革",
        house: Trigram::Kan,
        lines: ["子孙卯木 应", "官鬼丑土", "兄弟亥水", "兄弟亥水 世", "父母酉金", "官鬼未土"],
    },
    LineTable {
        name: "雷火丰",
        house: Trigram::Kan,
        lines: ["子孙卯木", "官鬼丑土 应", "兄弟亥水", "妻财午火", "父母申金 世", "官鬼戌土"],
    },
    LineTable {
        name: "地火明夷",
        house: Trigram::Kan,
        lines: ["子孙卯木 应", "官鬼丑土", "兄弟亥水", "官鬼丑土 世", "兄弟亥水", "父母酉金"],
    },
    LineTable {
        name: "地水师",
        house: Trigram::Kan,
        lines: ["子孙寅木", "官鬼辰土", "妻财午火 世", "官鬼丑土", "兄弟亥水", "父母酉金 应"],
    },
    LineTable {
        name: "艮为山",
        house: Trigram::Gen,
        lines: ["兄弟辰土", "父母午火", "子孙申金 应", "兄弟戌土", "妻财子水", "官鬼寅木 世"],
    },
    LineTable {
        name: "山火贲",
        house: Trigram::Gen,
        lines: ["官鬼卯木 世", "兄弟丑土", "妻财亥水", "兄弟戌土 应", "妻财子水", "官鬼寅木"],
    },
    LineTable {
        name: "山天大畜",
        house: Trigram::Gen,
        lines: ["妻财子水", "官鬼寅木 世", "兄弟辰土", "兄弟戌土", "妻财子水 应", "官鬼寅木"],
    },
    LineTable {
        name: "山泽损",
        house: Trigram::Gen,
        lines: ["父母巳火", "官鬼卯木", "兄弟丑土 世", "兄弟戌土", "妻财子水", "官鬼寅木 应"],
    },
    LineTable {
        name: "火泽睽",
        house: Trigram::Gen,
        lines: ["父母巳火 应", "官鬼卯木", "兄弟丑土", "子孙酉金 世", "兄弟未土", "父母巳火"],
    },
    LineTable {
        name: "天泽履",
        house: Trigram::Gen,
        lines: ["父母巳火", "官鬼卯木 应", "兄弟丑土", "父母午火", "子孙申金 世", "兄弟戌土"],
    },
    LineTable {
        name: "风泽中孚",
        house: Trigram::Gen,
        lines: ["父母巳火 应", "官鬼卯木", "兄弟丑土", "兄弟未土 世", "父母巳火", "官鬼卯木"],
    },
    LineTable {
        name: "风山渐",
        house: Trigram::Gen,
        lines: ["兄弟辰土", "父母午火", "子孙申金 世", "兄弟未土", "父母巳火", "官鬼卯木 应"],
    },
    LineTable {
        name: "坤为地",
        house: Trigram::Kun,
        lines: ["兄弟未土", "父母巳火", "官鬼卯木 应", "兄弟丑土", "妻财亥水", "子孙酉金 世"],
    },
    LineTable {
        name: "地雷复",
        house: Trigram::Kun,
        lines: ["妻财子水 世", "官鬼寅木", "兄弟辰土", "兄弟丑土 应", "妻财亥水", "子孙酉金"],
    },
    LineTable {
        name: "地泽临",
        house: Trigram::Kun,
        lines: ["父母巳火", "官鬼卯木 世", "兄弟丑土", "兄弟丑土", "妻财亥水 应", "子孙酉金"],
    },
    LineTable {
        name: "地天泰",
        house: Trigram::Kun,
        lines: ["妻财子水", "官鬼寅木", "兄弟辰土 世", "兄弟丑土", "妻财亥水", "子孙酉金 应"],
    },
    LineTable {
        name: "雷天大壮",
        house: Trigram::Kun,
        lines: ["妻财子水 应", "官鬼寅木", "兄弟辰土", "父母午火 世", "子孙申金", "兄弟戌土"],
    },
    LineTable {
        name: "泽天夬",
        house: Trigram::Kun,
        lines: ["妻财子水", "官鬼寅木 应", "兄弟辰土", "妻财亥水", "子孙酉金 世", "兄弟未土"],
    },
    LineTable {
        name: "水天需",
        house: Trigram::Kun,
        lines: ["妻财子水 应", "官鬼寅木", "兄弟辰土", "子孙申金 世", "兄弟戌土", "妻财子水"],
    },
    LineTable {
        name: "水地比",
        house: Trigram::Kun,
        lines: ["兄弟未土", "父母巳火", "官鬼卯木 世", "子孙申金", "兄弟戌土", "妻财子水 应"],
    },
];
