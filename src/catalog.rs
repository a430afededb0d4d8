//! 静态目录表：66 卷书（USFM 书卷码 + 章数）与 bible.com 译本编号。
//!
//! 纯数据，进程启动时即固定，不存在运行期修改。

/// 正典顺序的书卷表。顺序本身携带语义：1-based 序号用于存储路径前缀。
const BOOKS: [(&str, u32); 66] = [
    ("GEN", 50),
    ("EXO", 40),
    ("LEV", 27),
    ("NUM", 36),
    ("DEU", 34),
    ("JOS", 24),
    ("JDG", 21),
    ("RUT", 4),
    ("1SA", 31),
    ("2SA", 24),
    ("1KI", 22),
    ("2KI", 25),
    ("1CH", 29),
    ("2CH", 36),
    ("EZR", 10),
    ("NEH", 13),
    ("EST", 10),
    ("JOB", 42),
    ("PSA", 150),
    ("PRO", 31),
    ("ECC", 12),
    ("SNG", 8),
    ("ISA", 66),
    ("JER", 52),
    ("LAM", 5),
    ("EZK", 48),
    ("DAN", 12),
    ("HOS", 14),
    ("JOL", 3),
    ("AMO", 9),
    ("OBA", 1),
    ("JON", 4),
    ("MIC", 7),
    ("NAM", 3),
    ("HAB", 3),
    ("ZEP", 3),
    ("HAG", 2),
    ("ZEC", 14),
    ("MAL", 4),
    ("MAT", 28),
    ("MRK", 16),
    ("LUK", 24),
    ("JHN", 21),
    ("ACT", 28),
    ("ROM", 16),
    ("1CO", 16),
    ("2CO", 13),
    ("GAL", 6),
    ("EPH", 6),
    ("PHP", 4),
    ("COL", 4),
    ("1TH", 5),
    ("2TH", 3),
    ("1TI", 6),
    ("2TI", 4),
    ("TIT", 3),
    ("PHM", 1),
    ("HEB", 13),
    ("JAS", 5),
    ("1PE", 5),
    ("2PE", 3),
    ("1JN", 5),
    ("2JN", 1),
    ("3JN", 1),
    ("JUD", 1),
    ("REV", 22),
];

/// 译本短码 → bible.com 数字 ID。
const VERSIONS: [(&str, &str); 72] = [
    ("AMP", "1588"),
    ("AMPC", "8"),
    ("ASV", "12"),
    ("BSB", "3034"),
    ("CEB", "37"),
    ("CEV", "392"),
    ("CEVDCI", "303"),
    ("CEVUK", "294"),
    ("CJB", "1275"),
    ("CPDV", "42"),
    ("CSB", "1713"),
    ("DARBY", "478"),
    ("DRC1752", "55"),
    ("EASY", "2079"),
    ("ERV", "406"),
    ("ESV", "59"),
    ("FBV", "1932"),
    ("FNVNT", "3633"),
    ("GNBDC", "416"),
    ("GNBDK", "431"),
    ("GNBUK", "296"),
    ("GNT", "68"),
    ("GNTD", "69"),
    ("GNV", "2163"),
    ("GW", "70"),
    ("GWC", "1047"),
    ("HCSB", "72"),
    ("ICB", "1359"),
    ("JUB", "1077"),
    ("KJV", "1"),
    ("KJVAAE", "546"),
    ("KJVAE", "547"),
    ("LEB", "90"),
    ("LSB", "3345"),
    ("MEV", "1171"),
    ("MP1650", "1365"),
    ("MP1781", "3051"),
    ("MSG", "97"),
    ("NABRE", "463"),
    ("NASB1995", "100"),
    ("NASB2020", "2692"),
    ("NCV", "105"),
    ("NET", "107"),
    ("NIRV", "110"),
    ("NIV", "111"),
    ("NIVUK", "113"),
    ("NKJV", "114"),
    ("NLT", "116"),
    ("NMV", "2135"),
    ("NRSV", "2016"),
    ("NRSV-CI", "2015"),
    ("NRSVUE", "3523"),
    ("OYBCENGL", "3915"),
    ("PEV", "2530"),
    ("RAD", "2753"),
    ("RSV", "2020"),
    ("RSV-C", "2017"),
    ("RSVCI", "3548"),
    ("RV1885", "477"),
    ("RV1895", "1922"),
    ("TCENT", "3427"),
    ("TEG", "3010"),
    ("TLV", "314"),
    ("TOJB2011", "130"),
    ("TPT", "1849"),
    ("TS2009", "316"),
    ("WBMS", "2407"),
    ("WEBBE", "1204"),
    ("WEBUS", "206"),
    ("WMB", "1209"),
    ("WMBBE", "1207"),
    ("YLT98", "821"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookEntry {
    pub code: &'static str,
    /// 该卷的章数（1..=chapters 均可抓取）。
    pub chapters: u32,
    /// 正典顺序中的 1-based 序号。
    pub ordinal: usize,
}

impl BookEntry {
    /// 存储目录用的两位序号前缀，例如 RUT → "09"。
    pub fn ordinal_prefix(&self) -> String {
        format!("{:02}", self.ordinal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionEntry {
    pub code: &'static str,
    /// bible.com 侧的数字 ID，仅用于拼 URL。
    pub provider_id: &'static str,
}

pub fn all_books() -> impl Iterator<Item = BookEntry> {
    BOOKS
        .iter()
        .enumerate()
        .map(|(idx, &(code, chapters))| BookEntry {
            code,
            chapters,
            ordinal: idx + 1,
        })
}

pub fn find_book(code: &str) -> Option<BookEntry> {
    all_books().find(|b| b.code == code)
}

pub fn all_versions() -> impl Iterator<Item = VersionEntry> {
    VERSIONS.iter().map(|&(code, provider_id)| VersionEntry {
        code,
        provider_id,
    })
}

pub fn find_version(code: &str) -> Option<VersionEntry> {
    all_versions().find(|v| v.code == code)
}
