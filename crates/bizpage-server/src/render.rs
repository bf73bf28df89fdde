//! HTML for the landing page and the "not found" page.
//!
//! Page copy is fixed Vietnamese marketing text for the Star Hills Lộc An
//! project; only the business identity fields and the hero image come from
//! the resolved record. All record text goes through `maud` escaping.

use bizpage_core::BusinessRecord;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Outcome of a simulated contact form submission, shown as a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormNotice {
    /// Required fields were present.
    Sent,
    /// Name or phone was blank.
    MissingFields,
}

/// Navigation anchors, in page order.
const NAV_ITEMS: [(&str, &str); 8] = [
    ("TRANG CHỦ", "#home"),
    ("TỔNG QUAN", "#tongquan"),
    ("VỊ TRÍ", "#vitri"),
    ("TIỆN ÍCH", "#tienich"),
    ("GIÁ TRỊ ĐẦU TƯ", "#giatri"),
    ("PHÁP LÝ", "#phaply"),
    ("ĐĂNG KÝ", "#dangky"),
    ("LIÊN HỆ", "#lienhe"),
];

const OVERVIEW_FACTS: [&str; 4] = [
    "Vị trí: Lộc An, Bảo Lâm, Lâm Đồng",
    "Tên dự án: Star Hills Lộc An",
    "Diện tích đa dạng: 5×20, 6×20, 6×21…",
    "Pháp lý: Sổ hồng sẵn công chứng ngay",
];

const AMENITIES: [(&str, &str); 3] = [
    ("Hệ thống giao thông", "Kết nối vùng đồng bộ, thuận tiện di chuyển."),
    ("Khu du lịch", "Tiềm năng phát triển dịch vụ, du lịch sinh thái."),
    ("Khu dân cư", "Dân cư hiện hữu, tiện ích liền kề đầy đủ."),
];

const INVESTMENT_POINTS: [&str; 6] = [
    "Bảo Lâm – 1 trong 4 vùng kinh tế trọng điểm tỉnh Lâm Đồng.",
    "Lộc An sáp nhập vào TP. Bảo Lộc.",
    "Phát triển đô thị sinh thái mới: du lịch sinh thái rừng, thác, hồ; du lịch văn hóa…",
    "Chú trọng phát triển các đô thị chức năng công nghiệp, thương mại dịch vụ.",
    "Đề nghị phê duyệt chỉ tiêu sử dụng “đất ở” theo mức cao nhất giai đoạn 2021-2030.",
    "Xây dựng dự án hạ tầng chiến lược: nâng cấp quốc lộ, kết nối cao tốc…",
];

const INVESTMENT_BADGES: [&str; 4] = [
    "Sổ hồng riêng",
    "Hỗ trợ ngân hàng",
    "Công chứng sang tên ngay",
    "Dân cư hiện hữu",
];

const LEGAL_POINTS: [&str; 4] = [
    "Sổ hồng riêng",
    "Công chứng sang tên ngay",
    "Hỗ trợ ngân hàng",
    "Pháp lý minh bạch, thông tin rõ ràng",
];

const OVERVIEW_IMAGE: &str =
    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1200&auto=format&fit=crop";

const LEGAL_IMAGE: &str = "https://img.vietnamfinance.vn/upload/news/vungnv/2021/10/22/so-hong.jpg";

/// Google Maps embed URL for an address.
#[must_use]
pub fn map_embed_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps?q={}&output=embed",
        urlencoding::encode(address)
    )
}

fn head(title: &str) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (title) }
            meta name="description" content="Xác minh thông tin doanh nghiệp tự động";
            style { (PreEscaped(LANDING_CSS)) }
        }
    }
}

fn quote_button() -> Markup {
    html! {
        a href="#dangky" class="btn btn-gold" { "NHẬN BÁO GIÁ" }
    }
}

/// Render the landing page for `record`.
///
/// `host` seeds the fallback hero image when the record has no key.
#[must_use]
pub fn landing_page(record: &BusinessRecord, host: &str, notice: Option<FormNotice>) -> String {
    let hero = record.hero_image(host);
    let map_url = map_embed_url(&record.address);
    let tel = format!("tel:{}", record.phone);

    let markup = html! {
        (DOCTYPE)
        html lang="vi" {
            (head(&record.name))
            body {
                header class="header" {
                    div class="container header-row" {
                        div class="brand" {
                            div class="brand-icon" { "▦" }
                            div {
                                div class="brand-name" { (record.name) }
                                div class="brand-doc" {
                                    span class="badge" { "Document" }
                                    span class="doc-id" { (record.document) }
                                }
                            }
                        }
                        input type="checkbox" id="nav-toggle" class="nav-toggle";
                        label for="nav-toggle" class="nav-burger" aria-label="Menu" { "☰" }
                        nav class="nav" {
                            @for (label, href) in NAV_ITEMS {
                                a href=(href) { (label) }
                            }
                            a href="#dangky" class="btn btn-gold btn-small" { "ĐĂNG KÝ" }
                        }
                    }
                }

                section id="home" class="hero" {
                    img class="hero-img" src=(hero) alt="hero";
                    div class="hero-shade" {}
                    div class="container hero-body" {
                        div class="pill" { "✔ Xác minh doanh nghiệp" }
                        h1 { "STAR HILLS " span class="gold" { "LỘC AN" } }
                        h2 { "Khu nhà vườn sinh thái" }
                        p {
                            "Sự xuất hiện của Star Hills tại Lộc An sẽ tiên phong cho xu hướng "
                            "Second Home, kiến tạo trở thành khu nhà vườn sinh thái lí tưởng, "
                            "cho phép chủ nhân tận hưởng không khí xanh, bền vững an cư và đầu "
                            "tư cho tương lai."
                        }
                        div class="actions" {
                            (quote_button())
                            a href="#lienhe" class="btn btn-outline" { "LIÊN HỆ" }
                        }
                    }
                }

                section id="tongquan" class="container section" {
                    div class="section-head" {
                        h3 { "Thông tin " span class="gold" { "tổng quan" } }
                        (quote_button())
                    }
                    div class="grid-2" {
                        div class="card" {
                            div class="card-title gold" { "Thông tin" }
                            ul class="bullets" {
                                @for fact in OVERVIEW_FACTS {
                                    li { (fact) }
                                }
                            }
                        }
                        div class="card" {
                            div class="eyebrow" { "TÂM ĐIỂM ĐẦU TƯ" }
                            div class="headline" { "SINH LỜI " span class="gold" { "VƯỢT BẬC" } }
                            p {
                                "Star Hills Lộc An nằm tại vị trí đắc địa, gần như tiếp giáp TP. "
                                "Bảo Lộc – một trong các địa phương phát triển hàng đầu tại tỉnh "
                                "Lâm Đồng. Trong thời gian tới thị trường BĐS nơi đây có nhiều "
                                "lợi thế để gia tăng giá trị."
                            }
                            p {
                                "Khu nhà vườn sinh thái nằm trong khu dân cư hiện hữu với nhiều "
                                "tiện ích liền kề, thích hợp an cư nghỉ dưỡng và đầu tư."
                            }
                            img class="rounded" src=(OVERVIEW_IMAGE) alt="overview";
                        }
                    }
                }

                section id="vitri" class="container section" {
                    h3 { "Vị trí " span class="gold" { "đắc địa" } }
                    div class="grid-2" {
                        div {
                            p {
                                "Khu vực có hạ tầng kết nối vùng thuận tiện, đón đầu xu hướng "
                                "Second Home và tiềm năng tăng trưởng dài hạn."
                            }
                            div class="card" {
                                div class="card-title gold" { "Địa chỉ doanh nghiệp" }
                                div { (record.address) }
                            }
                        }
                        iframe class="map" title="map" loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade" src=(map_url) {}
                    }
                }

                section id="tienich" class="container section center" {
                    h3 class="gold" { "TIỆN ÍCH NGOẠI KHU" }
                    div class="grid-3" {
                        @for (title, desc) in AMENITIES {
                            div class="card" {
                                div class="card-title" { (title) }
                                div class="muted" { (desc) }
                            }
                        }
                    }
                    (quote_button())
                }

                section id="giatri" class="container section" {
                    h3 { "TIỀM NĂNG " span class="gold" { "ĐẦU TƯ" } " VÀ AN CƯ" }
                    div class="grid-2" {
                        ul class="checks" {
                            @for point in INVESTMENT_POINTS {
                                li { (point) }
                            }
                        }
                        div class="grid-2" {
                            @for badge in INVESTMENT_BADGES {
                                div class="card center" { (badge) }
                            }
                        }
                    }
                    (quote_button())
                }

                section id="phaply" class="container section" {
                    h3 class="gold underline" { "PHÁP LÝ ĐẦY ĐỦ" }
                    div class="grid-2" {
                        div class="card" {
                            @for point in LEGAL_POINTS {
                                p { "• " (point) }
                            }
                            (quote_button())
                        }
                        img class="rounded" src=(LEGAL_IMAGE) alt="Legal";
                    }
                }

                section id="dangky" class="container section" {
                    h3 { "Đăng ký " span class="gold" { "nhận thông tin" } }
                    p class="muted" {
                        "Xin chân thành cám ơn Quý khách đã quan tâm. Để biết thêm thông tin chi tiết, "
                        "Quý khách vui lòng liên hệ trực tiếp hoặc để lại thông tin theo mẫu bên dưới. "
                        "Chúng tôi sẽ hồi âm trong thời gian sớm nhất."
                    }
                    div class="grid-2" {
                        form class="card" method="post" action="/dang-ky" {
                            div class="card-title gold" { "GỬI THÔNG TIN" }
                            input type="text" name="name" placeholder="Họ và tên" required;
                            input type="tel" name="phone" placeholder="Số điện thoại" required;
                            input type="email" name="email" placeholder="Email";
                            textarea name="message" rows="4" placeholder="Nội dung quan tâm..." {}
                            button type="submit" class="btn btn-gold" { "ĐĂNG KÝ" }
                            p class="fineprint" {
                                "Chúng tôi đặc biệt cẩn trọng trong việc chuẩn bị các nội dung trên website này. "
                                "Mọi thông tin/hình ảnh mang tính chất tham khảo."
                            }
                        }
                        div id="lienhe" class="card" {
                            div class="card-title gold" { "THÔNG TIN LIÊN HỆ" }
                            div class="contact" {
                                div class="label" { "HOTLINE" }
                                a href=(tel) class="value" { (record.phone) }
                            }
                            div class="contact" {
                                div class="label" { "ADDRESS" }
                                div class="value" { (record.address) }
                            }
                            div class="contact" {
                                div class="label" { "DOCUMENT" }
                                div class="value" { (record.document) }
                            }
                            a href="#home" class="btn btn-outline" { "VỀ TRANG CHỦ" }
                        }
                    }
                    @match notice {
                        Some(FormNotice::Sent) => {
                            div class="toast" { "✅ Gửi thành công! Chúng tôi sẽ liên hệ sớm." }
                        },
                        Some(FormNotice::MissingFields) => {
                            div class="toast toast-warn" { "Vui lòng nhập họ tên và số điện thoại." }
                        },
                        None => {},
                    }
                }

                footer class="footer" {
                    div class="container grid-3" {
                        div {
                            div class="card-title gold" { (record.name) }
                            p class="muted" {
                                "Cung cấp giải pháp minh bạch thông tin doanh nghiệp hàng đầu tại khu vực."
                            }
                        }
                        div {
                            div class="card-title gold" { "Về chúng tôi" }
                            @for (label, href) in &NAV_ITEMS[..6] {
                                a class="footer-link" href=(href) { (label) }
                            }
                        }
                        div {
                            div class="card-title gold" { "Thông tin liên hệ" }
                            p { "HOTLINE: " (record.phone) }
                            p { "Address: " (record.address) }
                            p { "Document: " span class="gold" { (record.document) } }
                        }
                    }
                    div class="copyright" {
                        "© 2026 HỆ THỐNG XÁC MINH DOANH NGHIỆP - ALL RIGHTS RESERVED"
                    }
                }

                a href="#dangky" class="floating-cta" { "Đăng ký nhận thông tin" }
            }
        }
    };

    markup.into_string()
}

/// Render the page shown when no record is available for the host.
#[must_use]
pub fn not_found_page() -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="vi" {
            (head("Hệ thống tra cứu doanh nghiệp"))
            body {
                div class="not-found" {
                    "Không tìm thấy dữ liệu doanh nghiệp theo subdomain."
                    br;
                    "Vui lòng kiểm tra lại dòng trong Google Sheet."
                }
            }
        }
    };

    markup.into_string()
}

/// Stylesheet shared by both pages.
const LANDING_CSS: &str = r##"
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#052c24;--bg-deep:#031d18;--gold:#c4a52e;--text:#fff;--muted:rgba(255,255,255,.7);--line:rgba(255,255,255,.1)}
html{scroll-behavior:smooth}
body{font-family:-apple-system,'Segoe UI',Roboto,sans-serif;background:var(--bg);color:var(--text);line-height:1.6}
a{color:inherit;text-decoration:none}
img{max-width:100%;display:block}
.container{max-width:1140px;margin:0 auto;padding:0 20px}
.gold{color:var(--gold)}
.muted{color:var(--muted)}
.center{text-align:center}
.header{position:sticky;top:0;z-index:100;background:rgba(5,44,36,.95);border-bottom:1px solid var(--line);backdrop-filter:blur(6px)}
.header-row{display:flex;align-items:center;justify-content:space-between;gap:16px;padding-top:12px;padding-bottom:12px;flex-wrap:wrap}
.brand{display:flex;align-items:center;gap:12px}
.brand-icon{width:40px;height:40px;border-radius:10px;background:var(--gold);color:var(--bg);display:flex;align-items:center;justify-content:center;font-weight:800}
.brand-name{font-weight:800;text-transform:uppercase;letter-spacing:.5px}
.brand-doc{display:flex;gap:8px;align-items:center;font-size:12px}
.badge{background:var(--gold);color:var(--bg);border-radius:4px;padding:1px 6px;font-weight:700}
.doc-id{color:var(--muted)}
.nav{display:flex;gap:18px;align-items:center;font-size:13px;font-weight:600}
.nav a:hover{color:var(--gold)}
.nav-toggle,.nav-burger{display:none}
.btn{display:inline-flex;align-items:center;justify-content:center;padding:12px 26px;border-radius:999px;font-weight:800;font-size:14px;border:none;cursor:pointer;margin-top:16px}
.btn-gold{background:var(--gold);color:var(--bg)}
.btn-outline{border:1.5px solid rgba(255,255,255,.4);color:var(--text)}
.btn-small{padding:8px 16px;margin-top:0}
.hero{position:relative;min-height:560px;display:flex;align-items:center;overflow:hidden}
.hero-img{position:absolute;inset:0;width:100%;height:100%;object-fit:cover}
.hero-shade{position:absolute;inset:0;background:linear-gradient(90deg,rgba(3,29,24,.9),rgba(3,29,24,.35))}
.hero-body{position:relative;max-width:1140px;padding-top:80px;padding-bottom:80px}
.hero h1{font-size:52px;font-weight:900;line-height:1.1}
.hero h2{font-size:22px;margin:8px 0 16px}
.hero p{max-width:620px;color:var(--muted)}
.pill{display:inline-block;background:rgba(3,29,24,.55);border:1px solid var(--line);border-radius:999px;padding:6px 14px;font-size:13px;margin-bottom:16px}
.actions{display:flex;gap:12px;flex-wrap:wrap}
.section{padding-top:72px;padding-bottom:24px}
.section h3{font-size:30px;font-weight:900;margin-bottom:20px}
.section-head{display:flex;justify-content:space-between;align-items:flex-end;gap:16px;flex-wrap:wrap}
.grid-2{display:grid;grid-template-columns:repeat(2,1fr);gap:20px}
.grid-3{display:grid;grid-template-columns:repeat(3,1fr);gap:20px}
.card{background:rgba(255,255,255,.04);border:1px solid var(--line);border-radius:18px;padding:24px}
.card-title{font-weight:800;margin-bottom:10px}
.eyebrow{font-size:12px;letter-spacing:2px;color:var(--muted)}
.headline{font-size:26px;font-weight:900;margin-bottom:12px}
.bullets li,.checks li{margin:8px 0 8px 18px}
.checks li::marker{content:'✔ ';color:var(--gold)}
.rounded{border-radius:16px;margin-top:16px}
.map{width:100%;min-height:320px;border:0;border-radius:16px}
.underline{border-bottom:2px solid rgba(196,165,46,.25);padding-bottom:8px}
form input,form textarea{width:100%;margin:6px 0;padding:12px 14px;border-radius:12px;border:1px solid var(--line);background:rgba(255,255,255,.06);color:var(--text);font:inherit}
.fineprint{font-size:12px;color:var(--muted);margin-top:12px}
.contact{margin:12px 0}
.contact .label{font-size:12px;letter-spacing:1px;color:var(--muted)}
.contact .value{font-weight:700}
.toast{position:fixed;left:50%;bottom:90px;transform:translateX(-50%);background:var(--gold);color:var(--bg);font-weight:800;padding:12px 20px;border-radius:12px;animation:toast 2.2s forwards}
.toast-warn{background:#dc2626;color:#fff}
@keyframes toast{0%,80%{opacity:1}100%{opacity:0;visibility:hidden}}
.footer{margin-top:72px;border-top:1px solid var(--line);padding-top:40px;background:var(--bg-deep)}
.footer-link{display:block;color:var(--muted);font-size:14px;margin:4px 0}
.copyright{text-align:center;font-size:12px;color:var(--muted);padding:24px 0;border-top:1px solid var(--line);margin-top:32px}
.floating-cta{position:fixed;right:16px;bottom:16px;background:#dc2626;color:#fff;font-weight:800;padding:12px 18px;border-radius:999px;box-shadow:0 8px 24px rgba(0,0,0,.35)}
.not-found{min-height:100vh;display:flex;align-items:center;justify-content:center;flex-direction:column;font-style:italic;text-align:center;padding:0 24px}
@media(max-width:820px){
.nav{display:none;width:100%;flex-direction:column;align-items:flex-start;padding-bottom:12px}
.nav-burger{display:block;font-size:26px;cursor:pointer}
.nav-toggle:checked~.nav{display:flex}
.grid-2,.grid-3{grid-template-columns:1fr}
.hero h1{font-size:34px}
}
"##;
