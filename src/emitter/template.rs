//! 生成文件的固定头尾

/// 自动生成规则之前的部分（以方法体的 `{` 结尾，不换行）
pub const HEADER: &str = "\
/* This file was generated from data with the following license:
 *
 * MIT License
 *
 * Copyright (c) 2021 Jade Iqbal
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the \"Software\"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

namespace Whim;

/// <summary>
/// This file is automatically generated by komorebi-rulegen. Do not edit it manually.
/// </summary>
internal static class DefaultFilteredWindowsKomorebi
{
\t/// <summary>
\t/// Load the windows ignored by Komorebi <see href=\"https://github.com/LGUG2Z/komorebi-application-specific-configuration\"/>.
\t/// </summary>
\t/// <param name=\"filterManager\"></param>
\tpublic static void LoadWindowsIgnoredByKomorebi(IFilterManager filterManager)
\t{";

/// 自动生成规则之后的部分
pub const FOOTER: &str = "\t}\n}\n";

/// 重复规则行的注释前缀
pub const DUPLICATE_PREFIX: &str = "// ";
/// 重复规则行的尾注
pub const DUPLICATE_MARKER: &str = "  // duplicate rule";
