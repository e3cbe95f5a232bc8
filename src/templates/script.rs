use chrono::NaiveDate;

pub const SCRIPT_EXTENSION: &str = "py";

const SCRIPT_BODY: &str = r#"Description:
This is an automatically generated Python script with common imports and structure.
"""

import os
import sys
import numpy as np
import pandas as pd
import matplotlib.pyplot as plt
from typing import List, Dict, Tuple, Optional

# Constants
CONSTANT_EXAMPLE = 42

def main():
    """Main function that runs when the script is executed"""
    print("Hello from Python script!")
    print(f"Current working directory: {os.getcwd()}")

    # Example numpy operation
    arr = np.array([1, 2, 3])
    print(f"Numpy array sum: {arr.sum()}")

    # Example pandas DataFrame
    df = pd.DataFrame({'A': [1, 2], 'B': [3, 4]})
    print("\nSample DataFrame:")
    print(df)

if __name__ == "__main__":
    main()
"#;

/// Starter Python script for `base`, stamped with `date`.
pub fn render_script(base: &str, date: NaiveDate) -> String {
    format!(
        "#!/usr/bin/env python3\n\
         # -*- coding: utf-8 -*-\n\
         \n\
         \"\"\"\n\
         {base}.{SCRIPT_EXTENSION} - A Python script generated on {date}\n\
         \n\
         {SCRIPT_BODY}",
        date = date.format("%Y-%m-%d"),
    )
}
