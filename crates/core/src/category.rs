use serde::Serialize;

/// Id of the fallback category every unmatched phrase resolves to.
pub const OTHER_ID: &str = "other";

pub type CategoryId = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub color: &'static str,
    pub icon: &'static str,
    pub emoji: &'static str,
}

impl Category {
    pub fn is_other(&self) -> bool {
        self.id == OTHER_ID
    }
}

const CATEGORY_COUNT: usize = 12;
const OTHER_INDEX: usize = CATEGORY_COUNT - 1;

static CATEGORIES: [Category; CATEGORY_COUNT] = [
    Category {
        id: "food",
        name: "Ăn uống",
        keywords: &[
            "ăn", "cơm", "phở", "bánh", "uống", "cafe", "cà phê", "coffee", "kopi", "capuchino",
            "latte", "espresso", "bạc xỉu", "trà", "milk tea", "trà sữa", "sữa", "nhậu", "bún",
            "mì", "noodle", "pizza", "thịt", "rau", "siêu thị", "mart", "chợ", "ăn sáng",
            "ăn trưa", "ăn tối", "trà đá", "sinh tố", "nhà hàng", "buffet", "lẩu", "nướng",
            "cháo", "xôi", "hủ tiếu", "bánh canh", "bún bò", "bún riêu", "bánh cuốn", "đồ ăn",
            "nước ngọt",
        ],
        color: "#FB7185",
        icon: "Utensils",
        emoji: "🍔",
    },
    Category {
        id: "transport",
        name: "Di chuyển",
        keywords: &[
            "grab", "be", "gojek", "xăng", "gas", "bus", "xe buýt", "taxi", "xe ôm", "gửi xe",
            "parking", "rửa xe", "bảo dưỡng", "vé xe", "thu phí", "bot", "phạt xe", "sửa xe",
        ],
        color: "#FBBF24",
        icon: "Car",
        emoji: "🚗",
    },
    Category {
        id: "shopping",
        name: "Mua sắm",
        keywords: &[
            "quần áo", "clothes", "giày", "shoes", "dép", "shopee", "tiki", "lazada", "tiktok",
            "đồ dùng", "túi", "bag", "mũ", "nón", "đồng hồ", "trang sức", "mua",
        ],
        color: "#60A5FA",
        icon: "ShoppingBag",
        emoji: "🛍️",
    },
    Category {
        id: "bills",
        name: "Hóa đơn",
        keywords: &[
            "điện", "nước", "water", "bill", "net", "internet", "wifi", "4g", "5g", "điện thoại",
            "topup", "nạp thẻ", "thuê nhà", "rent", "phí quản lý", "chung cư", "rác", "vệ sinh",
        ],
        color: "#A78BFA",
        icon: "Receipt",
        emoji: "🧾",
    },
    Category {
        id: "beauty",
        name: "Làm đẹp",
        keywords: &[
            "cắt tóc", "hair", "gội đầu", "spa", "massage", "mỹ phẩm", "son", "lipstick", "phấn",
            "skincare", "làm móng", "nail", "tẩy trang", "sữa rửa mặt", "facial",
        ],
        color: "#F472B6",
        icon: "Sparkles",
        emoji: "💅",
    },
    Category {
        id: "health",
        name: "Sức khỏe",
        keywords: &[
            "thuốc", "medicine", "khám", "bệnh", "gym", "yoga", "bác sĩ", "doctor", "nha khoa",
            "dental", "bảo hiểm", "viện phí", "xét nghiệm",
        ],
        color: "#34D399",
        icon: "Activity",
        emoji: "💊",
    },
    Category {
        id: "education",
        name: "Giáo dục",
        keywords: &[
            "học phí", "tuition", "sách", "book", "vở", "bút", "khóa học", "course", "tiếng anh",
            "đóng học", "văn phòng phẩm", "tài liệu", "photo", "in ấn",
        ],
        color: "#818CF8",
        icon: "BookOpen",
        emoji: "📚",
    },
    Category {
        id: "social",
        name: "Hiếu hỉ",
        keywords: &[
            "cưới", "wedding", "đám ma", "sinh nhật", "birthday", "biếu", "tặng", "quà", "gift",
            "lì xì", "thăm bệnh", "đầy tháng", "thôi nôi", "party", "tiệc",
        ],
        color: "#FB7185",
        icon: "Gift",
        emoji: "💌",
    },
    Category {
        id: "entertainment",
        name: "Giải trí",
        keywords: &[
            "phim", "cinema", "netflix", "spotify", "youtube", "game", "du lịch", "travel", "vé",
            "ticket", "karaoke", "chơi", "bida", "bowling", "picnic", "hotel", "khách sạn",
        ],
        color: "#E879F9",
        icon: "Film",
        emoji: "🎮",
    },
    Category {
        id: "invest",
        name: "Đầu tư",
        keywords: &[
            "vàng", "gold", "chứng khoán", "stock", "tiết kiệm", "saving", "đất", "land", "coin",
            "crypto", "ngoại tệ", "usd", "bảo hiểm nhân thọ",
        ],
        color: "#38BDF8",
        icon: "TrendingUp",
        emoji: "💎",
    },
    Category {
        id: "income",
        name: "Thu nhập",
        keywords: &[
            "lương", "salary", "thưởng", "bonus", "được cho", "bán đồ", "lãi", "profit",
            "hoàn tiền", "cashback", "nhận tiền", "ting ting",
        ],
        color: "#10B981",
        icon: "Wallet",
        emoji: "💰",
    },
    Category {
        id: OTHER_ID,
        name: "Khác",
        keywords: &[],
        color: "#94A3B8",
        icon: "MoreHorizontal",
        emoji: "✨",
    },
];

/// Read-only access to the compiled-in category table.
pub mod registry {
    use super::{Category, CATEGORIES, OTHER_INDEX};

    /// Every category in display order, the sentinel last.
    pub fn all() -> &'static [Category] {
        &CATEGORIES
    }

    pub fn get(id: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.id == id)
    }

    /// Like [`get`], but unknown ids fall back to the sentinel.
    pub fn resolve(id: &str) -> &'static Category {
        get(id).unwrap_or_else(other)
    }

    pub fn other() -> &'static Category {
        &CATEGORIES[OTHER_INDEX]
    }

    /// Categories a phrase can be classified into (everything but the sentinel).
    pub fn searchable() -> impl Iterator<Item = &'static Category> {
        CATEGORIES.iter().filter(|c| !c.is_other())
    }
}
