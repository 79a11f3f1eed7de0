//! Built-in demonstration page.

/// A short wiki page exercising every construct the dialect supports.
///
/// Printed by `wikifmt --sample`.
pub const SAMPLE_DOCUMENT: &str = "\
= Adım Adım Wiki =

== Wiki Nedir? ==

1994'ten beri ayakta olan internet üzerinde çalışan *hypertext* veritabanı.
Metin formatındaki girdilerin tag kullanmadan özel işaretlerle taglenmesidir.

=== Başlıca Metin Simgeleri ===

*Bold text: Kalın metin* <br/>
//Italic text: Yatık metin// <br/>
_Underline text: Alt çizgili metin_ <br/>
~Strikeout text: Üzeri çizili metin~ <br/>
x^2^ ve H,,2,,O <br/>
[[/projects/njoy|njoy link]]
[[http://www.google.com|google]]

=== Keywords ===
    || alias || and || BEGIN ||
    || begin || break || case ||
    || class || def ||

=== QualityRank ===
    * Çekirdek
    * Performans
    * Kullanılabilirlik

=== Hedefler ===
    # Çekirdek
    # Performans
    # İstatistik
";
