/// Fixed KML wrapper shared by every mode: header, one style block with a
/// normal/highlight marker pair, a single top-level folder around the
/// renderer's fragments, and the closing tags.
pub struct DocumentAssembler {
    name: String,
}

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
<Document>
"#;

const STYLES: &str = r#"<Style id="markerNormal">
<IconStyle>
<scale>0.5</scale>
<Icon><href>http://maps.google.com/mapfiles/kml/shapes/placemark_circle.png</href></Icon>
</IconStyle>
<LabelStyle><scale>0</scale></LabelStyle>
</Style>
<Style id="markerHighlight">
<IconStyle>
<scale>0.7</scale>
<Icon><href>http://maps.google.com/mapfiles/kml/shapes/placemark_circle_highlight.png</href></Icon>
</IconStyle>
<LabelStyle><scale>1</scale></LabelStyle>
</Style>
<StyleMap id="markerMap">
<Pair><key>normal</key><styleUrl>#markerNormal</styleUrl></Pair>
<Pair><key>highlight</key><styleUrl>#markerHighlight</styleUrl></Pair>
</StyleMap>
"#;

const FOOTER: &str = r#"</Folder>
</Document>
</kml>
"#;

impl DocumentAssembler {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Wrap one rendered body in the fixed template.
    pub fn assemble(&self, body: &str) -> String {
        let mut out =
            String::with_capacity(HEADER.len() + STYLES.len() + FOOTER.len() + body.len() + 64);
        out.push_str(HEADER);
        out.push_str(&format!("<name>{}</name>\n", self.name));
        out.push_str(STYLES);
        out.push_str(&format!("<Folder>\n<name>{}</name>\n", self.name));
        out.push_str(body);
        out.push_str(FOOTER);
        out
    }
}
