//! GS1 company-prefix ranges naming the country or region that assigned a
//! manufacturer code.

struct PrefixRange {
    start: u16,
    end: u16,
    name: &'static str,
}

macro_rules! gs1 {
    ($start:expr, $end:expr, $name:expr) => {
        PrefixRange {
            start: $start,
            end: $end,
            name: $name,
        }
    };
}

static PREFIXES: &[PrefixRange] = &[
    gs1!(0, 19, "US / CANADA"),
    gs1!(20, 29, "IN STORE"),
    gs1!(30, 39, "US DRUGS"),
    gs1!(40, 49, "USED IN STORE"),
    gs1!(50, 59, "US COUPONS"),
    gs1!(60, 139, "US / CANADA"),
    gs1!(200, 299, "INTERNAL"),
    gs1!(300, 379, "FRANCE / MONACO"),
    gs1!(380, 380, "BULGARIA"),
    gs1!(383, 383, "SLOVENIA"),
    gs1!(385, 385, "CROATIA"),
    gs1!(387, 387, "BOSNIA AND HERZEGOVINA"),
    gs1!(389, 389, "MONTENEGRO"),
    gs1!(390, 390, "KOSOVO"),
    gs1!(400, 440, "GERMANY"),
    gs1!(450, 459, "JAPAN"),
    gs1!(460, 469, "RUSSIA"),
    gs1!(470, 470, "KYRGYZSTAN"),
    gs1!(471, 471, "TAIWAN"),
    gs1!(474, 474, "ESTONIA"),
    gs1!(475, 475, "LATVIA"),
    gs1!(476, 476, "AZERBAIJAN"),
    gs1!(477, 477, "LITHUANIA"),
    gs1!(478, 478, "UZBEKISTAN"),
    gs1!(479, 479, "SRI LANKA"),
    gs1!(480, 480, "PHILIPPINES"),
    gs1!(481, 481, "BELARUS"),
    gs1!(482, 482, "UKRAINE"),
    gs1!(483, 483, "TURKMENISTAN"),
    gs1!(484, 484, "MOLDOVA"),
    gs1!(485, 485, "ARMENIA"),
    gs1!(486, 486, "GEORGIA"),
    gs1!(487, 487, "KAZAKHSTAN"),
    gs1!(488, 488, "TAJIKISTAN"),
    gs1!(489, 489, "HONG KONG"),
    gs1!(490, 499, "JAPAN"),
    gs1!(500, 509, "UNITED KINGDOM"),
    gs1!(520, 521, "GREECE"),
    gs1!(528, 528, "LEBANON"),
    gs1!(529, 529, "CYPRUS"),
    gs1!(530, 530, "ALBANIA"),
    gs1!(531, 531, "NORTH MACEDONIA"),
    gs1!(535, 535, "MALTA"),
    gs1!(539, 539, "IRELAND"),
    gs1!(540, 549, "BELGIUM / LUXEMBOURG"),
    gs1!(560, 560, "PORTUGAL"),
    gs1!(569, 569, "ICELAND"),
    gs1!(570, 579, "DENMARK"),
    gs1!(590, 590, "POLAND"),
    gs1!(594, 594, "ROMANIA"),
    gs1!(599, 599, "HUNGARY"),
    gs1!(600, 601, "SOUTH AFRICA"),
    gs1!(603, 603, "GHANA"),
    gs1!(604, 604, "SENEGAL"),
    gs1!(608, 608, "BAHRAIN"),
    gs1!(609, 609, "MAURITIUS"),
    gs1!(611, 611, "MOROCCO"),
    gs1!(613, 613, "ALGERIA"),
    gs1!(615, 615, "NIGERIA"),
    gs1!(616, 616, "KENYA"),
    gs1!(618, 618, "IVORY COAST"),
    gs1!(619, 619, "TUNISIA"),
    gs1!(620, 620, "TANZANIA"),
    gs1!(621, 621, "SYRIA"),
    gs1!(622, 622, "EGYPT"),
    gs1!(623, 623, "BRUNEI"),
    gs1!(624, 624, "LIBYA"),
    gs1!(625, 625, "JORDAN"),
    gs1!(626, 626, "IRAN"),
    gs1!(627, 627, "KUWAIT"),
    gs1!(628, 628, "SAUDI ARABIA"),
    gs1!(629, 629, "UNITED ARAB EMIRATES"),
    gs1!(640, 649, "FINLAND"),
    gs1!(690, 699, "CHINA"),
    gs1!(700, 709, "NORWAY"),
    gs1!(729, 729, "ISRAEL"),
    gs1!(730, 739, "SWEDEN"),
    gs1!(740, 740, "GUATEMALA"),
    gs1!(741, 741, "EL SALVADOR"),
    gs1!(742, 742, "HONDURAS"),
    gs1!(743, 743, "NICARAGUA"),
    gs1!(744, 744, "COSTA RICA"),
    gs1!(745, 745, "PANAMA"),
    gs1!(746, 746, "DOMINICAN REPUBLIC"),
    gs1!(750, 750, "MEXICO"),
    gs1!(754, 755, "CANADA"),
    gs1!(759, 759, "VENEZUELA"),
    gs1!(760, 769, "SWITZERLAND / LIECHTENSTEIN"),
    gs1!(770, 771, "COLOMBIA"),
    gs1!(773, 773, "URUGUAY"),
    gs1!(775, 775, "PERU"),
    gs1!(777, 777, "BOLIVIA"),
    gs1!(778, 779, "ARGENTINA"),
    gs1!(780, 780, "CHILE"),
    gs1!(784, 784, "PARAGUAY"),
    gs1!(786, 786, "ECUADOR"),
    gs1!(789, 790, "BRAZIL"),
    gs1!(800, 839, "ITALY / SAN MARINO / VATICAN CITY"),
    gs1!(840, 849, "SPAIN / ANDORRA"),
    gs1!(850, 850, "CUBA"),
    gs1!(858, 858, "SLOVAKIA"),
    gs1!(859, 859, "CZECH REPUBLIC"),
    gs1!(860, 860, "SERBIA"),
    gs1!(865, 865, "MONGOLIA"),
    gs1!(867, 867, "NORTH KOREA"),
    gs1!(868, 869, "TURKEY"),
    gs1!(870, 879, "NETHERLANDS"),
    gs1!(880, 880, "SOUTH KOREA"),
    gs1!(884, 884, "CAMBODIA"),
    gs1!(885, 885, "THAILAND"),
    gs1!(888, 888, "SINGAPORE"),
    gs1!(890, 890, "INDIA"),
    gs1!(893, 893, "VIETNAM"),
    gs1!(896, 896, "PAKISTAN"),
    gs1!(899, 899, "INDONESIA"),
    gs1!(900, 919, "AUSTRIA"),
    gs1!(930, 939, "AUSTRALIA"),
    gs1!(940, 949, "NEW ZEALAND"),
    gs1!(950, 950, "GS1 GLOBAL OFFICE"),
    gs1!(955, 955, "MALAYSIA"),
    gs1!(958, 958, "MACAU"),
    gs1!(977, 977, "SERIAL PUBLICATIONS (ISSN)"),
    gs1!(978, 979, "BOOKLAND (ISBN)"),
    gs1!(980, 980, "REFUND RECEIPTS"),
    gs1!(981, 984, "COMMON CURRENCY COUPONS"),
    gs1!(990, 999, "COUPONS"),
];

/// Look up the first three digits of an EAN-13.
pub fn country_for_prefix(digits: &[u8]) -> Option<&'static str> {
    let [a, b, c, ..] = digits else {
        return None;
    };
    let prefix = u16::from(*a) * 100 + u16::from(*b) * 10 + u16::from(*c);
    PREFIXES
        .iter()
        .find(|r| (r.start..=r.end).contains(&prefix))
        .map(|r| r.name)
}
