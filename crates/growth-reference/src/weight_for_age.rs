//! WHO儿童生长标准体重别年龄参考数据（2006年版）
//!
//! 按性别分列的LMS参数表，覆盖0-60月龄，每月一行。
//! L为Box-Cox幂，M为中位数体重（公斤），S为变异系数。

use growth_core::Gender;
use serde::{Deserialize, Serialize};

/// 参考表覆盖的最小月龄
pub const MIN_AGE_MONTHS: i32 = 0;

/// 参考表覆盖的最大月龄
pub const MAX_AGE_MONTHS: i32 = 60;

/// 单一性别参考表的行数
pub const AGE_COUNT: usize = (MAX_AGE_MONTHS - MIN_AGE_MONTHS + 1) as usize;

/// 单月龄的LMS参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsCoefficient {
    pub age_months: i32, // 月龄
    pub l: f64,          // Box-Cox幂
    pub m: f64,          // 中位数体重（公斤）
    pub s: f64,          // 变异系数
}

const fn lms(age_months: i32, l: f64, m: f64, s: f64) -> LmsCoefficient {
    LmsCoefficient { age_months, l, m, s }
}

/// 男童体重别年龄LMS参数（0-60月龄）
pub const BOYS_WEIGHT_FOR_AGE: [LmsCoefficient; AGE_COUNT] = [
    lms(0, 0.3487, 3.3464, 0.14602),
    lms(1, 0.2297, 4.4709, 0.13395),
    lms(2, 0.1970, 5.5675, 0.12385),
    lms(3, 0.1738, 6.3762, 0.11727),
    lms(4, 0.1553, 7.0023, 0.11316),
    lms(5, 0.1395, 7.5105, 0.10990),
    lms(6, 0.1257, 7.9340, 0.10652),
    lms(7, 0.1134, 8.2970, 0.10337),
    lms(8, 0.1021, 8.6151, 0.10119),
    lms(9, 0.0917, 8.9014, 0.09961),
    lms(10, 0.0820, 9.1649, 0.09844),
    lms(11, 0.0730, 9.4122, 0.09756),
    lms(12, 0.0644, 9.6479, 0.09685),
    lms(13, 0.0563, 9.8749, 0.09626),
    lms(14, 0.0487, 10.0953, 0.09576),
    lms(15, 0.0413, 10.3108, 0.09532),
    lms(16, 0.0343, 10.5228, 0.09495),
    lms(17, 0.0275, 10.7319, 0.09462),
    lms(18, 0.0211, 10.9385, 0.09432),
    lms(19, 0.0148, 11.1430, 0.09405),
    lms(20, 0.0087, 11.3462, 0.09379),
    lms(21, 0.0029, 11.5486, 0.09355),
    lms(22, -0.0028, 11.7504, 0.09332),
    lms(23, -0.0083, 11.9514, 0.09311),
    lms(24, -0.0137, 12.1515, 0.09291),
    lms(25, -0.0189, 12.3502, 0.09273),
    lms(26, -0.0240, 12.5466, 0.09255),
    lms(27, -0.0289, 12.7401, 0.09239),
    lms(28, -0.0337, 12.9303, 0.09223),
    lms(29, -0.0385, 13.1169, 0.09208),
    lms(30, -0.0431, 13.3000, 0.09193),
    lms(31, -0.0476, 13.4798, 0.09178),
    lms(32, -0.0520, 13.6567, 0.09164),
    lms(33, -0.0564, 13.8309, 0.09150),
    lms(34, -0.0606, 14.0031, 0.09135),
    lms(35, -0.0648, 14.1736, 0.09121),
    lms(36, -0.0689, 14.3429, 0.09106),
    lms(37, -0.0729, 14.5113, 0.09091),
    lms(38, -0.0769, 14.6791, 0.09075),
    lms(39, -0.0808, 14.8466, 0.09059),
    lms(40, -0.0846, 15.0140, 0.09043),
    lms(41, -0.0883, 15.1813, 0.09026),
    lms(42, -0.0920, 15.3486, 0.09009),
    lms(43, -0.0957, 15.5158, 0.08992),
    lms(44, -0.0993, 15.6828, 0.08975),
    lms(45, -0.1028, 15.8497, 0.08958),
    lms(46, -0.1063, 16.0163, 0.08941),
    lms(47, -0.1097, 16.1827, 0.08924),
    lms(48, -0.1131, 16.3489, 0.08908),
    lms(49, -0.1165, 16.5150, 0.08893),
    lms(50, -0.1198, 16.6811, 0.08878),
    lms(51, -0.1230, 16.8471, 0.08865),
    lms(52, -0.1262, 17.0132, 0.08852),
    lms(53, -0.1294, 17.1792, 0.08841),
    lms(54, -0.1325, 17.3452, 0.08831),
    lms(55, -0.1356, 17.5111, 0.08823),
    lms(56, -0.1387, 17.6768, 0.08816),
    lms(57, -0.1417, 17.8422, 0.08810),
    lms(58, -0.1447, 18.0073, 0.08806),
    lms(59, -0.1477, 18.1722, 0.08804),
    lms(60, -0.1506, 18.3366, 0.08804),
];

/// 女童体重别年龄LMS参数（0-60月龄）
pub const GIRLS_WEIGHT_FOR_AGE: [LmsCoefficient; AGE_COUNT] = [
    lms(0, 0.3809, 3.2322, 0.14171),
    lms(1, 0.1714, 4.1873, 0.13724),
    lms(2, 0.0962, 5.1282, 0.13000),
    lms(3, 0.0402, 5.8458, 0.12619),
    lms(4, -0.0050, 6.4237, 0.12402),
    lms(5, -0.0430, 6.8985, 0.12274),
    lms(6, -0.0756, 7.2970, 0.12204),
    lms(7, -0.1039, 7.6422, 0.12178),
    lms(8, -0.1288, 7.9487, 0.12181),
    lms(9, -0.1507, 8.2254, 0.12199),
    lms(10, -0.1700, 8.4800, 0.12223),
    lms(11, -0.1872, 8.7192, 0.12247),
    lms(12, -0.2024, 8.9481, 0.12268),
    lms(13, -0.2158, 9.1699, 0.12283),
    lms(14, -0.2278, 9.3870, 0.12294),
    lms(15, -0.2384, 9.6008, 0.12299),
    lms(16, -0.2478, 9.8124, 0.12303),
    lms(17, -0.2562, 10.0226, 0.12306),
    lms(18, -0.2637, 10.2315, 0.12309),
    lms(19, -0.2703, 10.4393, 0.12315),
    lms(20, -0.2762, 10.6464, 0.12323),
    lms(21, -0.2815, 10.8534, 0.12335),
    lms(22, -0.2862, 11.0608, 0.12351),
    lms(23, -0.2903, 11.2688, 0.12370),
    lms(24, -0.2941, 11.4775, 0.12393),
    lms(25, -0.2975, 11.6864, 0.12415),
    lms(26, -0.3005, 11.8947, 0.12435),
    lms(27, -0.3032, 12.1015, 0.12452),
    lms(28, -0.3057, 12.3059, 0.12464),
    lms(29, -0.3080, 12.5073, 0.12472),
    lms(30, -0.3101, 12.7055, 0.12476),
    lms(31, -0.3120, 12.9006, 0.12476),
    lms(32, -0.3138, 13.0930, 0.12472),
    lms(33, -0.3155, 13.2837, 0.12465),
    lms(34, -0.3171, 13.4731, 0.12456),
    lms(35, -0.3186, 13.6618, 0.12445),
    lms(36, -0.3201, 13.8503, 0.12433),
    lms(37, -0.3216, 14.0385, 0.12421),
    lms(38, -0.3230, 14.2265, 0.12409),
    lms(39, -0.3243, 14.4142, 0.12397),
    lms(40, -0.3257, 14.6013, 0.12385),
    lms(41, -0.3270, 14.7877, 0.12374),
    lms(42, -0.3283, 14.9730, 0.12364),
    lms(43, -0.3296, 15.1572, 0.12354),
    lms(44, -0.3309, 15.3401, 0.12345),
    lms(45, -0.3322, 15.5216, 0.12336),
    lms(46, -0.3335, 15.7017, 0.12328),
    lms(47, -0.3348, 15.8805, 0.12321),
    lms(48, -0.3361, 16.0583, 0.12314),
    lms(49, -0.3374, 16.2353, 0.12308),
    lms(50, -0.3387, 16.4119, 0.12302),
    lms(51, -0.3400, 16.5885, 0.12297),
    lms(52, -0.3414, 16.7654, 0.12292),
    lms(53, -0.3427, 16.9431, 0.12287),
    lms(54, -0.3440, 17.1219, 0.12283),
    lms(55, -0.3453, 17.3020, 0.12279),
    lms(56, -0.3466, 17.4838, 0.12275),
    lms(57, -0.3479, 17.6676, 0.12272),
    lms(58, -0.3492, 17.8537, 0.12268),
    lms(59, -0.3505, 18.0423, 0.12265),
    lms(60, -0.3518, 18.2336, 0.12261),
];

/// 查询指定性别与月龄的LMS参数
///
/// 月龄超出0-60范围时返回None。
pub fn lookup(gender: Gender, age_months: i32) -> Option<&'static LmsCoefficient> {
    if !(MIN_AGE_MONTHS..=MAX_AGE_MONTHS).contains(&age_months) {
        return None;
    }
    let table = match gender {
        Gender::Male => &BOYS_WEIGHT_FOR_AGE,
        Gender::Female => &GIRLS_WEIGHT_FOR_AGE,
    };
    Some(&table[age_months as usize])
}
