use super::xml_reader::{self, ParseError, XmlVisit};
use crate::project_discovery::domain::PomDocument;

/// DescriptorParser service turning `pom.xml` text into a [`PomDocument`]
///
/// Only direct children of the root element are read, so the coordinates of
/// `<parent>`, `<dependency>` or `<plugin>` entries never leak into the
/// project's own. Submodules are accepted both as
/// `<modules><module>..</module></modules>` and as bare `<module>` elements
/// under the root; modules declared inside `<profiles>` are ignored.
pub struct DescriptorParser;

impl DescriptorParser {
    pub fn parse(xml: &str) -> Result<PomDocument, ParseError> {
        let mut document = PomDocument::default();

        xml_reader::walk(xml, |visit| {
            let XmlVisit::Close(path, text) = visit else {
                return;
            };
            // path[0] is the root element
            let fields: Vec<&str> = path.iter().skip(1).map(String::as_str).collect();
            match fields.as_slice() {
                ["groupId"] => document.group_id = text.to_string(),
                ["artifactId"] => document.artifact_id = text.to_string(),
                ["version"] => document.version = text.to_string(),
                ["packaging"] => document.packaging = text.to_string(),
                ["name"] => document.name = text.to_string(),
                ["parent", "groupId"] => document.parent.group_id = text.to_string(),
                ["parent", "artifactId"] => document.parent.artifact_id = text.to_string(),
                ["parent", "version"] => document.parent.version = text.to_string(),
                ["modules", "module"] | ["module"] if !text.is_empty() => {
                    document.modules.push(text.to_string())
                }
                _ => {}
            }
        })?;

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates_and_modules() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>parent</artifactId>
  <version>1.0.0-SNAPSHOT</version>
  <packaging>pom</packaging>
  <name>Example Parent</name>
  <modules>
    <module>a</module>
    <module>b</module>
  </modules>
</project>"#;

        let pom = DescriptorParser::parse(xml).unwrap();
        assert_eq!(pom.group_id, "com.example");
        assert_eq!(pom.artifact_id, "parent");
        assert_eq!(pom.version, "1.0.0-SNAPSHOT");
        assert_eq!(pom.packaging, "pom");
        assert_eq!(pom.name, "Example Parent");
        assert_eq!(pom.modules, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_without_modules_yields_empty_list() {
        let pom = DescriptorParser::parse(
            "<project><groupId>g</groupId><artifactId>leaf</artifactId></project>",
        )
        .unwrap();
        assert!(pom.modules.is_empty());
        assert_eq!(pom.artifact_id, "leaf");
    }

    #[test]
    fn test_parse_bare_module_elements() {
        let pom = DescriptorParser::parse(
            "<project><module>core</module><module>web</module></project>",
        )
        .unwrap();
        assert_eq!(pom.modules, vec!["core", "web"]);
    }

    #[test]
    fn test_parse_multiple_module_groups_are_concatenated() {
        let pom = DescriptorParser::parse(
            "<project><modules><module>a</module></modules><modules><module>b</module></modules></project>",
        )
        .unwrap();
        assert_eq!(pom.modules, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_ignores_nested_coordinates() {
        let xml = r#"<project>
  <parent>
    <groupId>org.parent</groupId>
    <artifactId>parent-pom</artifactId>
    <version>3</version>
  </parent>
  <artifactId>child</artifactId>
  <dependencies>
    <dependency>
      <groupId>junit</groupId>
      <artifactId>junit</artifactId>
      <version>4.13.2</version>
    </dependency>
  </dependencies>
  <profiles>
    <profile>
      <modules><module>extra</module></modules>
    </profile>
  </profiles>
</project>"#;

        let pom = DescriptorParser::parse(xml).unwrap();
        assert_eq!(pom.group_id, "");
        assert_eq!(pom.artifact_id, "child");
        assert_eq!(pom.version, "");
        assert_eq!(pom.parent.group_id, "org.parent");
        assert_eq!(pom.parent.artifact_id, "parent-pom");
        assert_eq!(pom.parent.version, "3");
        assert_eq!(pom.display_group_id(), "org.parent");
        assert!(pom.modules.is_empty());
    }

    #[test]
    fn test_parse_missing_coordinates_is_not_an_error() {
        let pom = DescriptorParser::parse("<project/>").unwrap();
        assert_eq!(pom, PomDocument::default());
    }

    #[test]
    fn test_parse_skips_blank_modules() {
        let pom = DescriptorParser::parse(
            "<project><modules><module>  </module><module/><module>x</module></modules></project>",
        )
        .unwrap();
        assert_eq!(pom.modules, vec!["x"]);
    }

    #[test]
    fn test_parse_malformed_reports_location() {
        let xml = "<project>\n  <artifactId>broken</groupId>\n</project>";
        let err = DescriptorParser::parse(xml).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_parse_non_xml_is_an_error() {
        assert!(DescriptorParser::parse("").is_err());
        assert!(DescriptorParser::parse("<project><modules>").is_err());
    }
}
