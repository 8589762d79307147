// Compiled-in clip table: (key, base64-encoded WAV)
//
// Regenerate entries with `audio::decoder::encode`. An empty table is a
// valid (silent) board.

pub static SOUND_TABLE: &[(&str, &str)] = &[
    (
        "Ouch.wav",
        "UklGRqQHAABXQVZFZm10IBAAAAABAAEAQB8AAIA+AAACABAAZGF0YYAHAADgMcRLZ0HfFxXjMLyd\
         tVnSoQSXNJNL1D6DFKjgq7vbtlbULQb/NPNK5z0SFAbhf7xet+PTugRAMwNKoD53Fhrkq75DtybR\
         XABIL4lIuECGG/Lpf8L7tn3MLfnQKPVFlkPlIqryiMhNt5DGYO94H3JBSUb3K0T+dtFSuWXAcOPv\
         Ev05hUe3NX0M791avm67UNY0A5UurkWZPoccRO7Ex4q5lcnm8I8eCD+FRM0sFwKf1tO8kL+M3f8J\
         GjL8RM068xcp6zrHJbvZy0DyQx6QPTZD+ywxBMzZS7+Kv1LagAS2LHtC+jyTHsvzHM7WvOfGGejf\
         EuM1CUMbNdYRgecix6m9xs6D8x8dADtOQaQt7Qcx34/D47+E1dD7oyNYPes+2idIAVTaLsIrwi/a\
         ywD7Jvc98TxqJPL9YtgnwrTDVdyEAp4ngj3sO5Mj0P3/2A3DMMTg2xYBxSUpPO87RyXFABjc6cTG\
         wwLZofxiIa05nDwyKbAG1+EsyAjDNNRP9TMabzUqPa0uUw+K6p/N98JSzn7r7Q+JLmQ8oTQgGmj2\
         ONb4xLPI/N+AAgUkvjhxOfglQgXR4rDKPcVH1HfyPxWMMPQ69DAZFrrzsdVJxrfKXuFnAoIivzZN\
         OLwmGgjW5jDObMYU0iHtaw7DKrI4pTNjHW39b96wyq3I+dga9mIWMC9lOBIvXBZu9rzZnslAywTe\
         vfu6GvgwUzfWK0oS9/Lu19LJEs2O4Pv98BvsMFQ2hypXEcnyf9i4yrXNbuD1/FIaYS+fNTEraRO3\
         9U7bUMxKzdrd1PjlFSks3DRrLS8Ysfuc4CLPfcxk2d/xgA6sJiozTzALH5cE4egk1HzMG9Sq6AUE\
         Fx43L2sy2Cb1D4L0g9zuzqbPYd7H9r0ReyfHMbstlhxUAznpuNVUzhfV/+egAbEaHywOMSwoDBRk\
         +mjiyNLTz0jaLO+jCJwfwi07L7IjaA5B9SbfHNKk0czdMvP5C2khui2oLUohCAyi86ferNLW0gjf\
         8PP0C7QgtyzhLDgh4Aw/9YjgItQ90wLekfHJCKEduCq7LDYjrhD0+d/k0tZX00Dbd+yPAukXHydl\
         LHYm5BalARbsmdtE1NvXZ+V9+RcP3iB2Ko8pcx7uC5P2n+Or15bV0N1K7vgC1hYdJWUqeiWaFycE\
         zu9o39XWEdjA4kz0hAijGmomISk1IlQTBQDM7CDeX9cM2nfl8fZpCmcbCSbtJ7QgEhJp//ns7t5s\
         2N7apeVJ9gQJpBl3JB0nECG2ExECD/Cm4fzZtdqX46PyhQRVFWwhNSazIrgXrwcW9rTm0Nx/2jDg\
         nuwa/RwODBz+I1EkAh2nDxn/0e4z4trbCt125VLzuANEE8Ye6SOuIZYYiQpt+ojr2+CI3GDfw+jC\
         9ocG6BQJH/Ai4h+IFsgIYflc63rhoN2F4Inp4PboBbYToB3EIWEf+xY5Cpf74e2y4/TegeAB6P7z\
         KgLaD3waGiCxH2EZYw7LACPz7+c74TrgDeXI7pj7IQntFNschB95HFEUkAhZ+wvv2OVc4Vjilejs\
         8oH/GAx7Ft0cKB4vGq0RKAal+U/uGeZl4szjBur28+P/wAuMFaIbAx1+GbcRBAc4+0vwD+jb41jk\
         Z+kn8iD9fQhkEjgZ5BsDGuwTpwq7/+30+etL5sPkl+dH7rz3bgKrDNcUrRlzGhUXIhC6Blj8mvIA\
         67DmTubd6cnw+vkEBGANoxS6GA4ZnhX2Dh0GbfxX8zTsDuh554TqsvAS+WQCSwt8Eu8WBxikFSgQ\
         ZAh9/7r2W+9q6pLoEOqj7p/1Av6ZBjQOxBOJFigWtxK5DAgFt/zq9LLu4er46QzszfCR92f/QAcR\
         DvISRBW/FHwR8wvjBEH9CvYx8HTsSevP7MzwtPbB/QYFlgueEH0T3RO7EWENZAeHAKz5qvM/7/Ls\
         Bu1w797zvflRAMsGYgxqEG0SMhLHD38L4gWg/3r5KfRM8FPudO6i8Jb01Pm8/5sFxgqkDsoQ/RBA\
         D8oLBweGAej70PbO8lHwm++78InzsPe2/AkCFAdLCzkOlA86DzwN1wltBXwAjvsn973zq/Ei8Svy\
         pPRG+Kr8WQHVBakJcgzrDfINjAzlCUUGDwKy/Z/5Pfbg88Dy9fJ09BH3hvp5/oMCQQZWCXgLdwxA\
         DNwKdAhGBaQB6P1s+oT3c/Vm9HL0kfWj93L6uv0pAXAEQgdgCZwK3QokCoQIKQZKAy4AG/1W+h34\
         nvb49TT2Sfca+Xv7Nf4IAbkDDAbRB+QIMwm6CIkHvAV/AwMBf/4m/Cr6svjb97D3M/hU+fj6+vwv\
         /2cBdwM2BYIGRAdwBwcHFQawBPcCDwEf/0v9t/uA+rv5dPms+Vz6cvvX/G7+FgCzASMDTwQjBZEF\
         lQUzBXUEbAMsAtAAcf8m/gj9KPyU+1P7Z/vL+3X8Vv1e/nf/jgCSAXACGwOKA7kDpwNYA9UCKAJg\
         AYsAuP/0/kv+x/1u/UT9Sf15/c/9Q/7L/l7/8P94APAAUAGTAbgBvwGqAXwBPAHuAJoARgD4/7T/\
         fv9Y/0T/P/9J/17/e/+d/77/2//y/wAABAA=",
    ),
    (
        "Rocket_shot-01.wav",
        "UklGRqQHAABXQVZFZm10IBAAAAABAAEAQB8AAIA+AAACABAAZGF0YYAHAAB06X/TKBP1yYQEKu/T\
         yOwAvsbS9zHL9s3Q9qEnlNK53kIPYjUnCcnzFTjUyt0piefN1uzTAeooJKPbQQmwD6bxWQU7zxTP\
         ed/fEw/4sutPCe76ZuqhH0oVvOTlB6kCeScLGN/p5jF52JD3ZBpv3OH+TNH6EJgaTwdtJYPtThNK\
         CdUHuvsNIQ0rgf3CD//VLxPzDY8uRR7V61r1qQ/Z03n8j+EI3ePXSxiS3lXpP/YVIczag/tZBJYh\
         2hufH9XstPji89Mg8iZs4q7keumw6cD+ZQdl7DHXXPlV9WQFrCRaDz4BZgkGDqbciR8CFlEdOBem\
         9zH4e+FLCpTeG9/z6Yrm/vOM3snaJOaS4vn1Qd1MG0gIleYp7g71TfYt5bcYyCKd/d/+J+No5CH1\
         0e+HFufomt+DHucBSujiAojg3AGTH+AX1gxv8Fr3fOqAERYCzxEt9XnuohNwHgsWDRO7E84ONO8U\
         ATL3aON247nykPF+CyUb4fzFGagcmxoe+MrvOvCP7hLvEwe8FkET2f6UCLwQ6OjlCJoWgg+vDc7+\
         kO6fD/72HhAqGXj6yfqLF8sLwu6Y7Ozt5BTAD+XtpBBgGPIHefhwApXt2+dPF2AHTgEyFcj8BRK/\
         DxzyH/Qh9q/zFgSs9DT8xu4REzv5E/7TA30SY/zyEhMAbgENAYnqWP388SbqHw2w8dn+wQlvAof4\
         yABcAg8MXO+JAnf1sfZQC1EAiwKrCtsQsf2PBDkAfQC2Bxr+UgEi/2ERzweyDjARsvZLAgQR/www\
         8qjx0f3u70r2FvBLBn8Kng5U8+QH0wUS884NyhD59R0QZfyN/zsRpQsx9KD9igB2+pD1zfmOB7nv\
         0gEA/uHvY/ocBGcAqvHlD2kJVA8283L4OvHqCLL4Q/SM/e4M/Al6+B719QwsAiQGePON8rIFwP0q\
         8xsNAATxCLbzeQpQ85QKqf5a+4cBPAxf+XX1wwCg+Aj1iPZ687v3z/qj+hsHRvoAAEr34fsT81b5\
         G/MsBlgB2PdX/1MLyfU9CEL+4P+KCEn9KwC7BBsMEvxFCB8FWwOp/UX8JPUE96D1zAUk+vb3H/YU\
         CLwIAQTn+gD6NPsR/yD4w/6a+nwKsAoPAUX6ZgrE+9P8//Rn/XP/DwCE+RoAWvXz+kD33v1O9vH1\
         5ftr+scBmgArBTwDawS5B8P9ffzBCfr4eQTYAvn2mwaxB30CjQQNBgr5dAAVAGIGyAUrBpUBXQdq\
         A5gDAPtb90T5dP3P+BcGDgFMAkICOAPQ/zj3PgVaBA0AnADCAoT4EQTD+8H4BvzfAwv7BATwB+f/\
         D/6o/wMDXATnAVACL/lW+hD84APm/BIBVPge+WX8rAL5ArUCy/xAAHf/fv8++usFgPsgB3oG3vhm\
         /7AE1QZE/6f80ftmBt37KQHs+lcAXgbb+ncEHwBZBc0CUfxuBdD/kflO+eT/WP9d/Tz78f2V/XUE\
         gPlCA2MEG/t4BbgCHAVX/WT+qP4+BhwBRv4d/zz9d/ok+xEEaP1ABf78NP0hAFP8gv5dBX8EowOF\
         AccEEwWQAIEC4fqhAnP/1gKdAZ/9APu2BOf7s/9M/s79lQIhBW79qgHi/ZsA4/6C/Hb89fw2BPn/\
         H/0pBBAFfv9b/Of85fts/u/7a/2e/a8AygNuAij/K/87ANL+df7X++X9aAR9/AgANAFdA2H95f2z\
         /Rb/g/8aBCMDWAO7+9j72wF9A8T/wwCm+xD/rwPMAgsDBwTd/bL8F/0wAIUBrAPWATcBLQKn/2sA\
         RPxHAtr9XQMpAXH+D/0M/hEBjQH8/Kz8MACjACX/5f3EAE38gv61/20DEwHXAtL/Dv4n/loDewGc\
         /pD8/f8+AW//Sf4tAfsCGP7D/OH+dP9BAfD9BgKfAQgABf4lA7/+IAI5/iv+tQGp/vAC+f/8/Tn+\
         ef8NAdkCxP1V/zT+9QLH/Tr9Sv1Z/28CVQJpAQADmAL7/iH+lgJ0AT/99gBL/0X/B/8Y/ib9vv4o\
         /5UC4P2cAl3+NP/JAccBof+I/dv/T/9FAln+Rv8fAoD9h/+lAWcBmP2T/bv9LALA/kQBCQIv/9n+\
         TwKWAND+FAEX/+X+j/1AAQgCpgAlArX9uf7i/ywCJgJ3/9X+rf/5//wBif5kARcBeQE9AXwAOv8x\
         /2L/QQEj/qr+HAHl/hr++v06AED/DwKjARMCAv8//k7+///fAMj/5/6p/34AtQABAWcBqQB7/lwB\
         Lv9DAID/7wDT/gT/A/+p/noBTABX/5v/3QEHAP7+JwGSANEBif7p/ysBPQGBAVf+Qv+j/uX+rgFL\
         AIQBjv9HAdP/K//1AIgBp/5TAGgADP+P/83+A/8w/1QAgAAH/2f+cP+UAPz+Zv8N//EAJwCf/r/+\
         rP8oAG4AvP73/pkAuv9X/2v/XgFw/zMAk//B/xQBdgGa/x7/qQAl/5P+JwHJ/+kAvP8VAeT/Dv+m\
         /iQAYwAhAeD+VQCm/wMADP9r/w4AIgH2/vr/zQA5ATb/CP8lAToB9f/c/hUBuP8FAU0A0AAn/7UA\
         UP/E/9kAzQA7/1L/w/8LALn/Gv9n/4gA7wA=",
    ),
];
