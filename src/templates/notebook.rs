use super::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// nbformat v4 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown {
        metadata: Map<String, Value>,
        source: Vec<String>,
    },
    Code {
        execution_count: Option<u32>,
        metadata: Map<String, Value>,
        outputs: Vec<Value>,
        source: Vec<String>,
    },
}

impl Cell {
    pub fn markdown<S: Into<String>>(source: impl IntoIterator<Item = S>) -> Self {
        Cell::Markdown {
            metadata: Map::new(),
            source: source.into_iter().map(Into::into).collect(),
        }
    }

    /// A code cell that has never been executed.
    pub fn code<S: Into<String>>(source: impl IntoIterator<Item = S>) -> Self {
        Cell::Code {
            execution_count: None,
            metadata: Map::new(),
            outputs: Vec::new(),
            source: source.into_iter().map(Into::into).collect(),
        }
    }

    pub fn source(&self) -> &[String] {
        match self {
            Cell::Markdown { source, .. } | Cell::Code { source, .. } => source,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Cell::Code { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    pub kernelspec: KernelSpec,
    pub language_info: LanguageInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelSpec {
    pub display_name: String,
    pub language: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub codemirror_mode: CodemirrorMode,
    pub file_extension: String,
    pub mimetype: String,
    pub name: String,
    pub nbconvert_exporter: String,
    pub pygments_lexer: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodemirrorMode {
    pub name: String,
    pub version: u32,
}

impl Default for NotebookMetadata {
    fn default() -> Self {
        Self {
            kernelspec: KernelSpec {
                display_name: "Python 3".to_string(),
                language: "python".to_string(),
                name: "python3".to_string(),
            },
            language_info: LanguageInfo {
                codemirror_mode: CodemirrorMode {
                    name: "ipython".to_string(),
                    version: 3,
                },
                file_extension: ".py".to_string(),
                mimetype: "text/x-python".to_string(),
                name: "python".to_string(),
                nbconvert_exporter: "python".to_string(),
                pygments_lexer: "ipython3".to_string(),
                version: "3.8.5".to_string(),
            },
        }
    }
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            metadata: NotebookMetadata::default(),
            nbformat: 4,
            nbformat_minor: 4,
        }
    }

    /// Starter analysis notebook: intro, imports, sample data, histogram, next steps.
    pub fn analysis_template(base: &str, date: NaiveDate) -> Self {
        let date = date.format("%Y-%m-%d");
        Self::new(vec![
            Cell::markdown([
                format!("# {base}.{NOTEBOOK_EXTENSION}"),
                "\n".to_string(),
                "## Jupyter Notebook Analysis\n".to_string(),
                format!("*Generated on {date}*\n"),
                "\n".to_string(),
                "This is an automatically generated Jupyter Notebook with common analysis setup."
                    .to_string(),
            ]),
            Cell::code([
                "# Common imports\n",
                "import numpy as np\n",
                "import pandas as pd\n",
                "import matplotlib.pyplot as plt\n",
                "%matplotlib inline\n",
                "\n",
                "print(\"Jupyter Notebook ready for analysis!\")",
            ]),
            Cell::code([
                "# Example data analysis\n",
                "data = pd.DataFrame({\n",
                "    'Values': np.random.randn(100),\n",
                "    'Category': np.random.choice(['A', 'B', 'C'], 100)\n",
                "})\n",
                "\n",
                "data.head()",
            ]),
            Cell::code([
                "# Example visualization\n",
                "plt.figure(figsize=(8, 4))\n",
                "data['Values'].hist(bins=20)\n",
                "plt.title('Distribution of Values')\n",
                "plt.xlabel('Value')\n",
                "plt.ylabel('Frequency')\n",
                "plt.show()",
            ]),
            Cell::markdown([
                "## Next Steps\n",
                "\n",
                "1. Add your analysis code in new cells\n",
                "2. Document your process with markdown cells\n",
                "3. Save your work regularly",
            ]),
        ])
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn test_template_layout() {
        let notebook = Notebook::analysis_template("report", date());
        let kinds: Vec<bool> = notebook.cells.iter().map(Cell::is_code).collect();
        assert_eq!(kinds, vec![false, true, true, true, false]);
        assert_eq!(notebook.cells[0].source()[0], "# report.ipynb");
        assert_eq!(notebook.cells[0].source()[3], "*Generated on 2024-03-07*\n");
    }

    #[test]
    fn test_json_envelope() {
        let json = Notebook::analysis_template("report", date()).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["nbformat"], 4);
        assert_eq!(value["nbformat_minor"], 4);
        assert_eq!(value["metadata"]["kernelspec"]["name"], "python3");
        assert_eq!(value["metadata"]["language_info"]["codemirror_mode"]["version"], 3);
        assert_eq!(value["cells"][0]["cell_type"], "markdown");
        assert_eq!(value["cells"][1]["cell_type"], "code");
        assert!(value["cells"][1]["execution_count"].is_null());
        assert_eq!(value["cells"][1]["outputs"], Value::Array(Vec::new()));
        assert!(value["cells"][0].get("execution_count").is_none());
    }

    #[test]
    fn test_from_json_reads_back() {
        let notebook = Notebook::analysis_template("report", date());
        let parsed = Notebook::from_json(&notebook.to_json().unwrap()).unwrap();
        assert_eq!(parsed, notebook);
    }
}
