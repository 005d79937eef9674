//! Baked heat-map of the cloth box: 328 nodes, 452 boundary triangles.
//!
//! Coordinates are already normalised into `[-1, 1]` and colours come from
//! the red/blue temperature ramp, so the tables can be uploaded as-is.

pub const NODE_COUNT: usize = 328;
pub const TRIANGLE_COUNT: usize = 452;

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub static POSITIONS: [f32; NODE_COUNT * 3] = [
    -0.266667, 0.666667, 0.0,
    -0.266667, 0.666667, 0.666667,
    -1.0, 0.666667, 0.0,
    -1.0, 0.666667, 0.666667,
    0.266667, 0.666667, 0.0,
    0.266667, 0.666667, 0.666667,
    1.0, 0.666667, 0.666667,
    1.0, 0.666667, 0.0,
    -0.266667, 0.266667, 0.666667,
    0.266667, 0.266667, 0.666667,
    -1.0, -0.666667, 0.666667,
    1.0, -0.666667, 0.666667,
    -0.266667, 0.266667, 0.0,
    0.266667, 0.266667, 0.0,
    1.0, -0.666667, 0.0,
    -1.0, -0.666667, 0.0,
    -0.266667, 0.666667, 0.159333,
    -0.266667, 0.666667, 0.355333,
    -0.266667, 0.666667, 0.523333,
    -0.4148, 0.666667, 0.0,
    -0.580533, 0.666667, 0.0,
    -0.770467, 0.666667, 0.0,
    -1.0, 0.666667, 0.45,
    -1.0, 0.666667, 0.224,
    -0.418467, 0.666667, 0.666667,
    -0.587133, 0.666667, 0.666667,
    -0.774867, 0.666667, 0.666667,
    0.266667, 0.666667, 0.144667,
    0.266667, 0.666667, 0.305333,
    0.266667, 0.666667, 0.491333,
    0.774867, 0.666667, 0.666667,
    0.587133, 0.666667, 0.666667,
    0.417733, 0.666667, 0.666667,
    1.0, 0.666667, 0.44,
    1.0, 0.666667, 0.216,
    0.774867, 0.666667, 0.0,
    0.587133, 0.666667, 0.0,
    0.417733, 0.666667, 0.0,
    -0.1424, 0.266667, 0.666667,
    -0.0064, 0.266667, 0.666667,
    0.1392, 0.266667, 0.666667,
    -0.266667, 0.521867, 0.666667,
    -0.266667, 0.394667, 0.666667,
    -1.0, 0.428, 0.666667,
    -1.0, 0.173333, 0.666667,
    -1.0, -0.0866667, 0.666667,
    -1.0, -0.408, 0.666667,
    -0.758, -0.666667, 0.666667,
    -0.49, -0.666667, 0.666667,
    -0.182, -0.666667, 0.666667,
    0.14, -0.666667, 0.666667,
    0.458, -0.666667, 0.666667,
    0.756, -0.666667, 0.666667,
    1.0, -0.409333, 0.666667,
    1.0, -0.105333, 0.666667,
    1.0, 0.156, 0.666667,
    1.0, 0.408, 0.666667,
    0.266667, 0.394667, 0.666667,
    0.266667, 0.533867, 0.666667,
    -0.266667, 0.389867, 0.0,
    -0.266667, 0.524267, 0.0,
    0.072, 0.266667, 0.0,
    -0.1072, 0.266667, 0.0,
    0.266667, 0.525067, 0.0,
    0.266667, 0.401467, 0.0,
    1.0, -0.418667, 0.0,
    1.0, -0.137333, 0.0,
    1.0, 0.166667, 0.0,
    1.0, 0.441333, 0.0,
    -0.724, -0.666667, 0.0,
    -0.412, -0.666667, 0.0,
    -0.1, -0.666667, 0.0,
    0.228, -0.666667, 0.0,
    0.51, -0.666667, 0.0,
    0.768, -0.666667, 0.0,
    -1.0, 0.412, 0.0,
    -1.0, 0.182667, 0.0,
    -1.0, -0.0786667, 0.0,
    -1.0, -0.368, 0.0,
    -1.0, -0.666667, 0.457333,
    -1.0, -0.666667, 0.239333,
    1.0, -0.666667, 0.444,
    1.0, -0.666667, 0.222,
    0.266667, 0.266667, 0.171333,
    0.266667, 0.266667, 0.346667,
    0.266667, 0.266667, 0.53,
    -0.266667, 0.266667, 0.152667,
    -0.266667, 0.266667, 0.338667,
    -0.266667, 0.266667, 0.526667,
    -0.413581, 0.666667, 0.227216,
    -0.465343, 0.666667, 0.442098,
    -0.528939, 0.666667, 0.129067,
    -0.672353, 0.666667, 0.146065,
    -0.839563, 0.666667, 0.147058,
    -0.743109, 0.666667, 0.369504,
    -0.565852, 0.666667, 0.264895,
    0.461669, 0.666667, 0.201528,
    0.410559, 0.666667, 0.40772,
    0.375488, 0.666667, 0.55065,
    0.698421, 0.666667, 0.50787,
    0.513765, 0.666667, 0.528759,
    0.692391, 0.666667, 0.178969,
    0.792186, 0.666667, 0.340166,
    0.593917, 0.666667, 0.360634,
    -0.223949, 0.141684, 0.666667,
    -0.0706022, 0.141299, 0.666667,
    0.0726233, 0.147773, 0.666667,
    0.218269, 0.143684, 0.666667,
    -0.390615, 0.467289, 0.666667,
    -0.381406, 0.329086, 0.666667,
    -0.531692, 0.520638, 0.666667,
    -0.671038, 0.545255, 0.666667,
    -0.817567, 0.490301, 0.666667,
    -0.817793, 0.28562, 0.666667,
    -0.8013, 0.0611751, 0.666667,
    -0.630496, -0.429208, 0.666667,
    -0.341341, -0.436153, 0.666667,
    -0.0414342, -0.426322, 0.666667,
    0.269419, -0.428252, 0.666667,
    0.540384, -0.441603, 0.666667,
    0.802233, -0.207188, 0.666667,
    0.810019, 0.013285, 0.666667,
    0.802967, 0.236142, 0.666667,
    0.789296, 0.456545, 0.666667,
    0.567632, 0.500169, 0.666667,
    0.416269, 0.344508, 0.666667,
    0.388796, 0.486275, 0.666667,
    0.409813, 0.160802, 0.666667,
    -0.372178, 0.189465, 0.666667,
    0.747814, -0.401968, 0.666667,
    -0.748388, -0.180283, 0.666667,
    -0.481863, -0.211486, 0.666667,
    0.0140044, 0.0330781, 0.666667,
    0.140648, 0.033839, 0.666667,
    -0.489624, 0.392787, 0.666667,
    -0.639001, 0.381926, 0.666667,
    -0.643712, 0.184176, 0.666667,
    0.601993, 0.298067, 0.666667,
    0.424333, -0.206363, 0.666667,
    0.0861111, -0.150949, 0.666667,
    0.631015, -0.095011, 0.666667,
    -0.361795, 0.00308593, 0.666667,
    -0.136718, -0.013372, 0.666667,
    -0.503977, 0.264717, 0.666667,
    0.295472, -0.00947037, 0.666667,
    0.622689, 0.100895, 0.666667,
    -0.591877, -0.00772292, 0.666667,
    -0.496697, 0.125208, 0.666667,
    -0.216948, -0.211787, 0.666667,
    0.628961, -0.271273, 0.666667,
    0.476469, -0.00945771, 0.666667,
    -0.374824, 0.345545, 0.0,
    -0.389683, 0.471754, 0.0,
    0.157294, 0.100193, 0.0,
    -0.0266772, 0.119952, 0.0,
    -0.185563, 0.134009, 0.0,
    0.403685, 0.463327, 0.0,
    0.402543, 0.300702, 0.0,
    0.693503, 0.49613, 0.0,
    0.700327, -0.326741, 0.0,
    0.753892, 0.013796, 0.0,
    0.756514, 0.276427, 0.0,
    -0.599613, -0.353214, 0.0,
    -0.27144, -0.391043, 0.0,
    0.0472531, -0.33739, 0.0,
    0.373066, -0.362601, 0.0,
    -0.827307, 0.279814, 0.0,
    -0.810437, 0.058974, 0.0,
    -0.803174, -0.162018, 0.0,
    -0.512152, 0.54101, 0.0,
    -0.651203, 0.51839, 0.0,
    0.357039, 0.111473, 0.0,
    0.531754, 0.531782, 0.0,
    -0.821304, 0.481207, 0.0,
    -0.319262, 0.136908, 0.0,
    -0.426463, 0.225934, 0.0,
    0.0247015, -0.0607912, 0.0,
    -0.125068, 0.00707781, 0.0,
    0.499513, -0.0804876, 0.0,
    -0.394859, -0.150178, 0.0,
    0.247191, -0.103231, 0.0,
    -0.61912, 0.187979, 0.0,
    0.555988, 0.373587, 0.0,
    -0.521779, 0.381068, 0.0,
    -0.273561, 0.0032644, 0.0,
    -0.611946, -0.0579704, 0.0,
    -0.167187, -0.156524, 0.0,
    0.554695, 0.167737, 0.0,
    -0.688772, 0.369158, 0.0,
    -0.442334, 0.0553614, 0.0,
    -1.0, 0.227217, 0.25605,
    -1.0, -0.0116947, 0.224052,
    -1.0, -0.265348, 0.196836,
    -1.0, -0.480988, 0.160309,
    -1.0, -0.447568, 0.359149,
    -1.0, 0.26898, 0.477098,
    -1.0, 0.0613582, 0.452876,
    -1.0, -0.19117, 0.426507,
    -1.0, 0.451995, 0.347259,
    -0.565262, -0.666667, 0.22416,
    -0.327548, -0.666667, 0.342038,
    0.0124734, -0.666667, 0.329482,
    0.330442, -0.666667, 0.309297,
    0.63018, -0.666667, 0.242031,
    0.767409, -0.666667, 0.428033,
    -0.584623, -0.666667, 0.447744,
    -0.780818, -0.666667, 0.340013,
    1.0, -0.231524, 0.205826,
    1.0, 0.0279308, 0.255006,
    1.0, 0.325056, 0.21367,
    1.0, 0.455425, 0.393414,
    1.0, -0.190107, 0.435172,
    1.0, 0.0243325, 0.493446,
    1.0, 0.234561, 0.445427,
    1.0, -0.434845, 0.330441,
    0.127161, 0.266667, 0.281851,
    0.0928964, 0.266667, 0.46083,
    0.0316205, 0.266667, 0.145729,
    -0.127261, 0.266667, 0.143815,
    -0.158687, 0.266667, 0.274808,
    -0.109311, 0.266667, 0.455097,
    -0.0227618, 0.266667, 0.290741,
    -0.266667, 0.461991, 0.207668,
    -0.266667, 0.463884, 0.473385,
    0.266667, 0.470724, 0.255349,
    0.266667, 0.482893, 0.411003,
    0.266667, 0.514575, 0.557496,
    0.266667, 0.466183, 0.114758,
    -0.503331, -0.186242, 0.421953,
    0.49371, -0.243295, 0.41187,
    0.0416062, -0.216287, 0.317985,
    0.801931, 0.189115, 0.256085,
    0.700934, 0.427239, 0.442125,
    -0.695195, 0.43133, 0.451634,
    -0.554444, 0.314966, 0.155035,
    -0.504809, 0.100023, 0.241974,
    -0.484166, 0.357977, 0.489427,
    -0.324854, 0.0878198, 0.496835,
    0.187043, -0.0819871, 0.257375,
    0.392339, 0.0380324, 0.198634,
    -0.0599222, -0.13646, 0.194422,
    -0.101575, -0.407236, 0.28875,
    -0.0972781, -0.185204, 0.448121,
    0.153527, -0.32218, 0.187838,
    0.153433, -0.31016, 0.439083,
    0.160167, 0.122469, 0.239177,
    -0.267344, 0.0649115, 0.14084,
    -0.797921, 0.148469, 0.326323,
    -0.804903, -0.0950296, 0.22742,
    -0.785794, -0.37844, 0.206341,
    -0.690727, -0.048795, 0.447929,
    -0.561314, -0.158933, 0.185971,
    -0.521605, 0.110955, 0.458079,
    -0.0572162, 0.0874514, 0.232501,
    -0.112005, 0.0468283, 0.484823,
    0.159074, 0.129911, 0.478968,
    -0.369879, -0.177563, 0.275956,
    -0.372706, -0.42136, 0.18823,
    -0.516326, -0.426285, 0.375276,
    -0.279662, -0.325907, 0.436787,
    -0.322492, -0.107757, 0.488948,
    0.593729, 0.316421, 0.321585,
    0.635891, 0.0568937, 0.276775,
    0.550864, -0.135808, 0.279903,
    0.529246, -0.388229, 0.211576,
    0.354425, -0.257145, 0.228021,
    0.689867, -0.327234, 0.451869,
    0.545869, -0.0944466, 0.490715,
    0.339789, -0.142259, 0.372158,
    0.558261, 0.0867844, 0.526741,
    0.712525, 0.183591, 0.47633,
    0.515951, 0.314488, 0.497443,
    0.306651, 0.107479, 0.368318,
    0.756389, -0.0646102, 0.473603,
    0.420055, -0.410612, 0.457782,
    -0.74976, -0.361524, 0.466266,
    0.789315, -0.119575, 0.22189,
    0.00220068, 0.149046, 0.54253,
    0.80182, -0.398702, 0.224453,
    -0.169381, 0.157601, 0.551553,
    -0.646278, 0.203153, 0.526726,
    -0.425832, 0.213293, 0.5393,
    -0.46975, -0.0292348, 0.529146,
    -0.203455, 0.131346, 0.376783,
    -0.240246, 0.161473, 0.237742,
    -0.109993, 0.162781, 0.251268,
    -0.411757, 0.193436, 0.298154,
    -0.318941, 0.0294184, 0.281031,
    0.397059, 0.438273, 0.519467,
    0.404742, 0.171556, 0.481624,
    0.40589, 0.304476, 0.328746,
    0.495374, 0.13069, 0.364803,
    0.219451, -0.0520408, 0.489104,
    0.403353, 0.00942245, 0.476097,
    0.332683, -0.170792, 0.532383,
    0.0396732, -0.0439138, 0.442124,
    0.283016, 0.0908006, 0.545525,
    0.51489, 0.552771, 0.519703,
    -0.219581, 0.167261, 0.117726,
    0.000631187, 0.154319, 0.190438,
    0.019632, 0.014309, 0.185948,
    -0.00153387, 0.122563, 0.348045,
    -0.68614, 0.229676, 0.15282,
    -0.49933, 0.166133, 0.131966,
    -0.617387, 0.040616, 0.175966,
    -0.594024, 0.159146, 0.315456,
    -0.401514, 0.349086, 0.150315,
    -0.84458, 0.329422, 0.19189,
    -0.691587, 0.477741, 0.211074,
    -0.624982, 0.321232, 0.315643,
    -0.515491, 0.502225, 0.142337,
    -0.462169, 0.454011, 0.311837,
    -0.427202, 0.0551308, 0.168757,
    -0.473305, -0.0103305, 0.331853,
    -0.126661, 0.0751479, 0.139293,
    -0.128357, 0.0206524, 0.287316,
    -0.352507, 0.169384, 0.158408,
    -0.211738, -0.0628913, 0.169921,
    -0.352265, -0.0552346, 0.127972,
    -0.223489, -0.242503, 0.18086,
    -0.220617, -0.0810903, 0.350486,
    0.37787, 0.545546, 0.14357,
    0.453834, 0.495295, 0.324216,
    0.799529, 0.452771, 0.210293,
    0.486597, 0.431473, 0.153748,
    0.612831, 0.488031, 0.169946,
    0.53157, 0.260559, 0.159166,
    0.366012, 0.388343, 0.153435,
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub static COLORS: [f32; NODE_COUNT * 3] = [
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.0123613, 0.0, 0.987639,
    0.996012, 0.0, 0.00398755,
    1.0, 0.0, 0.0,
    0.012402, 0.0, 0.987598,
    0.77791, 0.0, 0.22209,
    0.982151, 0.0, 0.0178486,
    0.948685, 0.0, 0.0513151,
    0.99896, 0.0, 0.00104019,
    0.00945968, 0.0, 0.99054,
    0.0124387, 0.0, 0.987561,
    0.0124837, 0.0, 0.987516,
    0.0112186, 0.0, 0.988781,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.224687, 0.0, 0.775313,
    0.460842, 0.0, 0.539158,
    0.735537, 0.0, 0.264463,
    0.999223, 0.0, 0.000776628,
    0.99776, 0.0, 0.00223993,
    0.996587, 0.0, 0.00341339,
    0.662747, 0.0, 0.337253,
    0.331245, 0.0, 0.668755,
    0.0123544, 0.0, 0.987646,
    0.012378, 0.0, 0.987622,
    0.0123336, 0.0, 0.987666,
    0.882121, 0.0, 0.117879,
    0.928739, 0.0, 0.0712612,
    0.960372, 0.0, 0.0396276,
    0.39029, 0.0, 0.60971,
    0.589175, 0.0, 0.410825,
    0.478823, 0.0, 0.521177,
    0.751594, 0.0, 0.248406,
    0.866904, 0.0, 0.133096,
    0.934705, 0.0, 0.0652947,
    0.950016, 0.0, 0.0499839,
    0.956835, 0.0, 0.0431654,
    0.96895, 0.0, 0.0310496,
    0.982691, 0.0, 0.0173087,
    0.992348, 0.0, 0.00765163,
    0.998071, 0.0, 0.00192886,
    0.998608, 0.0, 0.00139184,
    0.998517, 0.0, 0.00148285,
    0.998852, 0.0, 0.0011479,
    0.999416, 0.0, 0.000583502,
    0.990721, 0.0, 0.00927867,
    0.995131, 0.0, 0.00486851,
    0.00755218, 0.0, 0.992448,
    0.0, 0.0, 1.0,
    0.0108854, 0.0, 0.989115,
    0.0104297, 0.0, 0.98957,
    0.0122783, 0.0, 0.987722,
    0.0122078, 0.0, 0.987792,
    0.0123654, 0.0, 0.987635,
    0.0123105, 0.0, 0.987689,
    0.0124118, 0.0, 0.987588,
    0.0123963, 0.0, 0.987604,
    0.0115742, 0.0, 0.988426,
    0.01188, 0.0, 0.98812,
    0.0123958, 0.0, 0.987604,
    0.0122825, 0.0, 0.987718,
    0.0123112, 0.0, 0.987689,
    0.0122503, 0.0, 0.98775,
    0.0108377, 0.0, 0.989162,
    0.00780561, 0.0, 0.992194,
    0.00980351, 0.0, 0.990196,
    0.0119827, 0.0, 0.988017,
    0.644734, 0.0, 0.355266,
    0.338068, 0.0, 0.661932,
    0.667973, 0.0, 0.332027,
    0.339849, 0.0, 0.660151,
    0.257906, 0.0, 0.742094,
    0.511555, 0.0, 0.488445,
    0.780034, 0.0, 0.219966,
    0.162143, 0.0, 0.837857,
    0.351287, 0.0, 0.648713,
    0.582662, 0.0, 0.417338,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.00254492, 0.0, 0.997455,
    0.308464, 0.0, 0.691536,
    0.612418, 0.0, 0.387582,
    0.823928, 0.0, 0.176072,
    0.762563, 0.0, 0.237437,
    0.792033, 0.0, 0.207967,
    0.276054, 0.0, 0.723946,
    0.514465, 0.0, 0.485535,
    0.543788, 0.0, 0.456212,
    0.866107, 0.0, 0.133893,
    0.917281, 0.0, 0.0827187,
    0.951311, 0.0, 0.0486889,
    0.972731, 0.0, 0.0272689,
    0.454295, 0.0, 0.545705,
    0.656378, 0.0, 0.343622,
    0.368644, 0.0, 0.631356,
    0.285082, 0.0, 0.714918,
    0.389063, 0.0, 0.610937,
    0.647879, 0.0, 0.352121,
    0.807023, 0.0, 0.192977,
    0.942377, 0.0, 0.0576232,
    0.954426, 0.0, 0.0455736,
    0.970809, 0.0, 0.0291912,
    0.98599, 0.0, 0.0140105,
    0.994054, 0.0, 0.00594602,
    0.997477, 0.0, 0.00252308,
    0.997695, 0.0, 0.00230518,
    0.998175, 0.0, 0.00182497,
    0.99884, 0.0, 0.00116046,
    0.997056, 0.0, 0.00294368,
    0.992194, 0.0, 0.00780551,
    0.9948, 0.0, 0.00519952,
    0.988125, 0.0, 0.0118747,
    0.790605, 0.0, 0.209395,
    0.997116, 0.0, 0.0028836,
    0.900359, 0.0, 0.099641,
    0.919575, 0.0, 0.0804246,
    0.946498, 0.0, 0.053502,
    0.965017, 0.0, 0.0349828,
    0.56834, 0.0, 0.43166,
    0.569907, 0.0, 0.430093,
    0.754129, 0.0, 0.245871,
    0.99593, 0.0, 0.00407045,
    0.989972, 0.0, 0.0100279,
    0.968125, 0.0, 0.0318745,
    0.995041, 0.0, 0.00495925,
    0.8821, 0.0, 0.1179,
    0.926167, 0.0, 0.073833,
    0.702604, 0.0, 0.297396,
    0.980438, 0.0, 0.019562,
    0.995208, 0.0, 0.00479216,
    0.854643, 0.0, 0.145357,
    0.802847, 0.0, 0.197153,
    0.944052, 0.0, 0.0559482,
    0.995114, 0.0, 0.00488632,
    0.990276, 0.0, 0.00972403,
    0.00523812, 0.0, 0.994762,
    0.0120155, 0.0, 0.987985,
    0.0119534, 0.0, 0.988047,
    0.012041, 0.0, 0.987959,
    0.0105807, 0.0, 0.989419,
    0.0123369, 0.0, 0.987663,
    0.0122089, 0.0, 0.987791,
    0.0123586, 0.0, 0.987641,
    0.0124484, 0.0, 0.987552,
    0.0123549, 0.0, 0.987645,
    0.0123406, 0.0, 0.987659,
    0.0115313, 0.0, 0.988469,
    0.0114788, 0.0, 0.988521,
    0.0119248, 0.0, 0.988075,
    0.0121357, 0.0, 0.987864,
    0.00496309, 0.0, 0.995037,
    0.0125305, 0.0, 0.987469,
    0.00982428, 0.0, 0.990176,
    0.00452163, 0.0, 0.995478,
    0.0038943, 0.0, 0.996106,
    0.0120334, 0.0, 0.987967,
    0.0123277, 0.0, 0.987672,
    0.00423324, 0.0, 0.995767,
    0.0104428, 0.0, 0.989557,
    0.00994811, 0.0, 0.990052,
    0.0111369, 0.0, 0.988863,
    0.0107689, 0.0, 0.989231,
    0.0121366, 0.0, 0.987863,
    0.0107937, 0.0, 0.989206,
    0.0123694, 0.0, 0.987631,
    0.00837999, 0.0, 0.99162,
    0.0122946, 0.0, 0.987705,
    0.00485653, 0.0, 0.995143,
    0.0108411, 0.0, 0.989159,
    0.0106165, 0.0, 0.989383,
    0.0120783, 0.0, 0.987922,
    0.0123863, 0.0, 0.987614,
    0.0094003, 0.0, 0.9906,
    0.00984812, 0.0, 0.990152,
    0.236462, 0.0, 0.763538,
    0.261791, 0.0, 0.738209,
    0.264108, 0.0, 0.735892,
    0.227421, 0.0, 0.772579,
    0.496306, 0.0, 0.503694,
    0.434155, 0.0, 0.565845,
    0.519587, 0.0, 0.480413,
    0.556801, 0.0, 0.443199,
    0.178311, 0.0, 0.821689,
    0.320809, 0.0, 0.679191,
    0.491442, 0.0, 0.508558,
    0.48305, 0.0, 0.51695,
    0.461984, 0.0, 0.538016,
    0.367518, 0.0, 0.632482,
    0.643648, 0.0, 0.356352,
    0.635791, 0.0, 0.364209,
    0.478569, 0.0, 0.521431,
    0.315552, 0.0, 0.684448,
    0.388137, 0.0, 0.611863,
    0.327434, 0.0, 0.672566,
    0.593531, 0.0, 0.406469,
    0.654491, 0.0, 0.345509,
    0.741033, 0.0, 0.258967,
    0.670199, 0.0, 0.329801,
    0.499853, 0.0, 0.500147,
    0.40375, 0.0, 0.59625,
    0.653068, 0.0, 0.346932,
    0.207268, 0.0, 0.792732,
    0.187977, 0.0, 0.812023,
    0.339341, 0.0, 0.660659,
    0.593738, 0.0, 0.406262,
    0.395509, 0.0, 0.604491,
    0.107694, 0.0, 0.892306,
    0.28008, 0.0, 0.71992,
    0.386117, 0.0, 0.613883,
    0.615151, 0.0, 0.384849,
    0.832673, 0.0, 0.167327,
    0.180106, 0.0, 0.819894,
    0.565321, 0.0, 0.434679,
    0.614555, 0.0, 0.385445,
    0.460024, 0.0, 0.539976,
    0.38927, 0.0, 0.61073,
    0.664346, 0.0, 0.335654,
    0.282525, 0.0, 0.717475,
    0.123868, 0.0, 0.876132,
    0.27403, 0.0, 0.72597,
    0.404949, 0.0, 0.595051,
    0.616591, 0.0, 0.383409,
    0.37712, 0.0, 0.62288,
    0.299392, 0.0, 0.700608,
    0.278438, 0.0, 0.721562,
    0.417194, 0.0, 0.582806,
    0.63416, 0.0, 0.36584,
    0.280618, 0.0, 0.719382,
    0.643656, 0.0, 0.356344,
    0.347415, 0.0, 0.652585,
    0.181236, 0.0, 0.818764,
    0.340185, 0.0, 0.659815,
    0.284478, 0.0, 0.715522,
    0.287411, 0.0, 0.712589,
    0.559272, 0.0, 0.440728,
    0.246369, 0.0, 0.753631,
    0.525382, 0.0, 0.474618,
    0.318618, 0.0, 0.681382,
    0.656464, 0.0, 0.343536,
    0.689477, 0.0, 0.310523,
    0.374529, 0.0, 0.625471,
    0.270778, 0.0, 0.729222,
    0.524835, 0.0, 0.475165,
    0.616635, 0.0, 0.383365,
    0.656583, 0.0, 0.343417,
    0.484659, 0.0, 0.515341,
    0.418124, 0.0, 0.581876,
    0.421811, 0.0, 0.578189,
    0.321554, 0.0, 0.678446,
    0.342454, 0.0, 0.657546,
    0.677536, 0.0, 0.322464,
    0.731679, 0.0, 0.268321,
    0.550928, 0.0, 0.449072,
    0.785462, 0.0, 0.214538,
    0.714243, 0.0, 0.285757,
    0.743025, 0.0, 0.256975,
    0.54212, 0.0, 0.45788,
    0.710149, 0.0, 0.289851,
    0.681599, 0.0, 0.318401,
    0.642048, 0.0, 0.357952,
    0.338606, 0.0, 0.661394,
    0.755849, 0.0, 0.244151,
    0.342788, 0.0, 0.657212,
    0.714389, 0.0, 0.285611,
    0.547791, 0.0, 0.452209,
    0.583647, 0.0, 0.416353,
    0.679958, 0.0, 0.320042,
    0.474776, 0.0, 0.525224,
    0.288723, 0.0, 0.711277,
    0.329658, 0.0, 0.670342,
    0.315179, 0.0, 0.684821,
    0.354603, 0.0, 0.645397,
    0.775246, 0.0, 0.224754,
    0.713918, 0.0, 0.286082,
    0.491281, 0.0, 0.508719,
    0.545024, 0.0, 0.454976,
    0.71329, 0.0, 0.28671,
    0.704792, 0.0, 0.295208,
    0.786007, 0.0, 0.213993,
    0.628183, 0.0, 0.371817,
    0.79979, 0.0, 0.20021,
    0.778266, 0.0, 0.221734,
    0.146661, 0.0, 0.853339,
    0.266523, 0.0, 0.733477,
    0.265396, 0.0, 0.734604,
    0.482501, 0.0, 0.517499,
    0.142269, 0.0, 0.857731,
    0.143212, 0.0, 0.856788,
    0.204708, 0.0, 0.795292,
    0.330594, 0.0, 0.669406,
    0.116173, 0.0, 0.883827,
    0.144177, 0.0, 0.855823,
    0.0999325, 0.0, 0.900067,
    0.246284, 0.0, 0.753716,
    0.056465, 0.0, 0.943535,
    0.174267, 0.0, 0.825733,
    0.205034, 0.0, 0.794966,
    0.412721, 0.0, 0.587279,
    0.190521, 0.0, 0.809479,
    0.38801, 0.0, 0.61199,
    0.178221, 0.0, 0.821779,
    0.232982, 0.0, 0.767018,
    0.171864, 0.0, 0.828136,
    0.257368, 0.0, 0.742632,
    0.476815, 0.0, 0.523185,
    0.222792, 0.0, 0.777208,
    0.488317, 0.0, 0.511683,
    0.322404, 0.0, 0.677596,
    0.237583, 0.0, 0.762417,
    0.262189, 0.0, 0.737811,
    0.24521, 0.0, 0.75479,
    0.235704, 0.0, 0.764296,
];

#[rustfmt::skip]
pub static INDICES: [u16; TRIANGLE_COUNT * 3] = [
    16, 0, 19, 17, 16, 89, 18, 17, 90, 17, 89, 90,
    1, 18, 24, 24, 18, 90, 19, 20, 91, 20, 21, 92,
    20, 92, 91, 21, 2, 93, 92, 21, 93, 2, 23, 93,
    22, 3, 26, 23, 22, 94, 22, 26, 94, 25, 24, 90,
    26, 25, 94, 93, 23, 94, 25, 90, 94, 16, 19, 89,
    92, 93, 94, 91, 92, 95, 90, 89, 95, 92, 94, 95,
    19, 91, 89, 89, 91, 95, 94, 90, 95, 4, 27, 37,
    27, 28, 96, 28, 29, 97, 28, 97, 96, 29, 5, 98,
    97, 29, 98, 5, 32, 98, 30, 6, 33, 31, 30, 99,
    32, 31, 100, 98, 32, 100, 31, 99, 100, 30, 33, 99,
    34, 7, 35, 35, 36, 101, 37, 27, 96, 34, 35, 101,
    33, 34, 102, 33, 102, 99, 37, 96, 36, 34, 101, 102,
    36, 96, 101, 97, 98, 100, 101, 96, 103, 102, 101, 103,
    96, 97, 103, 99, 102, 103, 99, 103, 100, 97, 100, 103,
    38, 8, 104, 39, 38, 105, 38, 104, 105, 40, 39, 106,
    39, 105, 106, 9, 40, 107, 40, 106, 107, 41, 1, 24,
    42, 41, 108, 8, 42, 109, 42, 108, 109, 24, 25, 110,
    25, 26, 111, 25, 111, 110, 26, 3, 112, 111, 26, 112,
    3, 43, 112, 43, 44, 113, 43, 113, 112, 44, 45, 114,
    44, 114, 113, 46, 10, 47, 47, 48, 115, 48, 49, 116,
    48, 116, 115, 49, 50, 117, 50, 51, 118, 50, 118, 117,
    51, 52, 119, 51, 119, 118, 52, 11, 53, 53, 54, 120,
    54, 55, 121, 55, 56, 122, 56, 6, 123, 122, 56, 123,
    6, 30, 123, 30, 31, 124, 30, 124, 123, 31, 32, 124,
    32, 5, 58, 57, 9, 125, 58, 57, 126, 57, 125, 126,
    41, 24, 108, 46, 47, 115, 32, 58, 126, 9, 107, 127,
    8, 109, 128, 24, 110, 108, 52, 53, 129, 116, 49, 117,
    45, 46, 130, 32, 126, 124, 121, 55, 122, 120, 54, 121,
    125, 9, 127, 104, 8, 128, 130, 46, 115, 130, 115, 131,
    115, 116, 131, 106, 105, 132, 107, 106, 133, 106, 132, 133,
    109, 108, 134, 108, 110, 134, 111, 112, 135, 110, 111, 135,
    112, 113, 135, 129, 53, 120, 113, 114, 136, 114, 45, 130,
    124, 126, 125, 124, 125, 137, 118, 119, 138, 117, 118, 139,
    119, 52, 129, 125, 127, 137, 120, 121, 140, 122, 123, 137,
    123, 124, 137, 104, 128, 141, 105, 104, 142, 105, 142, 132,
    128, 109, 143, 109, 134, 143, 127, 107, 144, 107, 133, 144,
    121, 122, 145, 140, 121, 145, 122, 137, 145, 114, 130, 146,
    136, 114, 146, 130, 131, 146, 128, 143, 147, 135, 113, 136,
    128, 147, 141, 139, 118, 138, 116, 117, 148, 129, 120, 149,
    119, 129, 149, 120, 140, 149, 131, 116, 148, 117, 139, 148,
    104, 141, 142, 137, 127, 145, 145, 127, 150, 140, 145, 150,
    127, 144, 150, 135, 136, 143, 134, 110, 135, 142, 141, 148,
    119, 149, 138, 131, 148, 141, 148, 139, 142, 135, 143, 134,
    138, 149, 140, 138, 140, 150, 143, 136, 147, 131, 141, 146,
    141, 147, 146, 146, 147, 136, 139, 138, 144, 133, 132, 139,
    144, 133, 139, 144, 138, 150, 142, 139, 132, 59, 12, 151,
    60, 59, 152, 59, 151, 152, 0, 60, 19, 61, 13, 153,
    62, 61, 154, 61, 153, 154, 12, 62, 155, 63, 4, 37,
    64, 63, 156, 13, 64, 157, 64, 156, 157, 35, 7, 68,
    36, 35, 158, 35, 68, 158, 65, 14, 74, 66, 65, 159,
    67, 66, 160, 66, 159, 160, 68, 67, 161, 158, 68, 161,
    67, 160, 161, 69, 15, 78, 70, 69, 162, 71, 70, 163,
    70, 162, 163, 72, 71, 164, 71, 163, 164, 73, 72, 165,
    72, 164, 165, 76, 75, 166, 77, 76, 167, 76, 166, 167,
    78, 77, 168, 77, 167, 168, 20, 19, 169, 21, 20, 170,
    20, 169, 170, 19, 60, 152, 63, 37, 156, 65, 74, 159,
    153, 13, 171, 62, 154, 155, 159, 74, 73, 13, 157, 171,
    37, 36, 172, 69, 78, 162, 36, 158, 172, 73, 165, 159,
    75, 2, 173, 19, 152, 169, 12, 155, 174, 21, 170, 173,
    2, 21, 173, 151, 12, 175, 12, 174, 175, 75, 173, 166,
    37, 172, 156, 154, 153, 176, 155, 154, 177, 159, 165, 178,
    163, 162, 179, 160, 159, 178, 153, 171, 180, 153, 180, 176,
    167, 166, 181, 172, 158, 182, 156, 172, 182, 158, 161, 182,
    165, 164, 180, 169, 152, 183, 152, 151, 183, 174, 155, 184,
    155, 177, 184, 168, 167, 185, 157, 156, 182, 154, 176, 177,
    163, 179, 186, 170, 169, 183, 167, 181, 185, 162, 78, 168,
    180, 171, 178, 183, 151, 175, 164, 163, 186, 180, 164, 176,
    171, 157, 187, 165, 180, 178, 171, 187, 178, 187, 157, 182,
    162, 168, 185, 162, 185, 179, 166, 173, 188, 175, 174, 189,
    166, 188, 181, 174, 184, 189, 186, 179, 184, 179, 185, 189,
    176, 164, 186, 160, 178, 187, 187, 182, 161, 189, 184, 179,
    161, 160, 187, 173, 170, 188, 185, 181, 189, 189, 181, 175,
    175, 181, 183, 176, 186, 177, 170, 183, 188, 177, 186, 184,
    188, 183, 181, 2, 75, 23, 75, 76, 190, 76, 77, 191,
    76, 191, 190, 77, 78, 192, 77, 192, 191, 78, 15, 193,
    192, 78, 193, 15, 80, 193, 79, 10, 46, 80, 79, 194,
    79, 46, 194, 43, 3, 22, 44, 43, 195, 45, 44, 196,
    44, 195, 196, 46, 45, 197, 194, 46, 197, 45, 196, 197,
    22, 23, 198, 193, 80, 194, 43, 22, 198, 195, 43, 198,
    23, 75, 198, 191, 192, 197, 190, 191, 196, 196, 195, 190,
    196, 191, 197, 195, 198, 190, 198, 75, 190, 193, 194, 192,
    192, 194, 197, 15, 69, 80, 69, 70, 199, 70, 71, 200,
    70, 200, 199, 71, 72, 201, 71, 201, 200, 72, 73, 202,
    72, 202, 201, 73, 74, 203, 73, 203, 202, 74, 14, 82,
    81, 11, 52, 82, 81, 204, 81, 52, 204, 47, 10, 79,
    48, 47, 205, 49, 48, 200, 50, 49, 201, 51, 50, 202,
    52, 51, 204, 79, 80, 206, 80, 69, 206, 47, 79, 206,
    74, 82, 203, 202, 50, 201, 201, 49, 200, 205, 47, 206,
    205, 206, 199, 200, 48, 205, 199, 206, 69, 51, 202, 203,
    200, 205, 199, 204, 51, 203, 203, 82, 204, 14, 65, 82,
    65, 66, 207, 66, 67, 208, 66, 208, 207, 67, 68, 209,
    67, 209, 208, 68, 7, 34, 33, 6, 56, 34, 33, 210,
    33, 56, 210, 53, 11, 81, 54, 53, 211, 55, 54, 212,
    56, 55, 213, 210, 56, 213, 55, 212, 213, 81, 82, 214,
    82, 65, 214, 53, 81, 214, 53, 214, 211, 212, 54, 211,
    68, 34, 209, 212, 211, 208, 211, 214, 207, 214, 65, 207,
    208, 211, 207, 212, 208, 213, 208, 209, 213, 34, 210, 209,
    209, 210, 213, 83, 13, 61, 84, 83, 215, 85, 84, 216,
    84, 215, 216, 9, 85, 40, 40, 85, 216, 61, 62, 217,
    62, 12, 218, 217, 62, 218, 12, 86, 218, 86, 87, 219,
    86, 219, 218, 88, 8, 38, 38, 39, 220, 39, 40, 216,
    83, 61, 217, 88, 38, 220, 88, 220, 87, 220, 39, 216,
    215, 83, 217, 217, 218, 221, 215, 217, 221, 218, 219, 221,
    216, 215, 221, 219, 87, 220, 220, 216, 221, 219, 220, 221,
    86, 12, 59, 87, 86, 222, 88, 87, 223, 87, 222, 223,
    8, 88, 42, 42, 88, 223, 60, 0, 16, 16, 17, 222,
    17, 18, 223, 18, 1, 41, 86, 59, 222, 60, 16, 222,
    59, 60, 222, 222, 17, 223, 18, 41, 223, 41, 42, 223,
    27, 4, 63, 28, 27, 224, 29, 28, 225, 28, 224, 225,
    5, 29, 226, 58, 5, 226, 29, 225, 226, 63, 64, 227,
    64, 13, 83, 84, 85, 225, 85, 9, 57, 57, 58, 226,
    64, 83, 227, 224, 27, 227, 63, 227, 27, 84, 225, 224,
    83, 84, 224, 85, 57, 226, 225, 85, 226, 227, 83, 224,
];
