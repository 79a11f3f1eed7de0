//! Rendering of the built-in sample page.

use wikifmt::{SAMPLE_DOCUMENT, format};

#[test]
fn sample_page_renders() {
    let html = format(SAMPLE_DOCUMENT);
    insta::assert_snapshot!(html.trim_end(), @r"
<h1> Adım Adım Wiki </h1>

<h2> Wiki Nedir? </h2>

1994'ten beri ayakta olan internet üzerinde çalışan <b>hypertext</b> veritabanı.
Metin formatındaki girdilerin tag kullanmadan özel işaretlerle taglenmesidir.

<h3> Başlıca Metin Simgeleri </h3>

<b>Bold text: Kalın metin</b> <br/>
<i>Italic text: Yatık metin</i> <br/>
<u>Underline text: Alt çizgili metin</u> <br/>
<s>Strikeout text: Üzeri çizili metin</s> <br/>
x<sup>2</sup> ve H<sub>2</sub>O <br/>
<a href='/projects/njoy'>njoy link</a>
<a href='http://www.google.com'>google</a>

<h3> Keywords </h3>
<table>
<tr>
<td> alias </td>
<td> and </td>
<td> BEGIN </td>
</tr>
<tr>
<td> begin </td>
<td> break </td>
<td> case </td>
</tr>
<tr>
<td> class </td>
<td> def </td>
<td></td>
</tr>
</table>

<h3> QualityRank </h3>
<ul>   <li>Çekirdek</li>
   <li>Performans</li>
   <li>Kullanılabilirlik</li>
</ul>

<h3> Hedefler </h3>
<ol>   <li>Çekirdek</li>
   <li>Performans</li>
   <li>İstatistik</li>
</ol>
");
}

#[test]
fn sample_page_ends_with_rendered_list() {
    // The sample ends with a newline, so its final list is not dropped.
    assert!(format(SAMPLE_DOCUMENT).ends_with("</ol>\n"));
}
